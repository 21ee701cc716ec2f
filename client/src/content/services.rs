//! Service categories shown as tabs on the services page.

#[derive(Clone, Copy, Debug)]
pub struct Service {
    pub name: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Category {
    pub slug: &'static str,
    pub title: &'static str,
    pub services: &'static [Service],
}

pub const CATEGORIES: &[Category] = &[
    Category {
        slug: "geophysics",
        title: "Геофизика",
        services: &[
            Service {
                name: "Сейсморазведка 2D / 3D / 4D",
                desc: "Полный комплекс полевых работ и интерпретация. Оптимизация бурения и оценка структур.",
            },
            Service { name: "Магниторазведка", desc: "Низкоточная и высокоточная съёмка с наземных и воздушных платформ." },
            Service { name: "Электроразведка (ВЭЗ, IP)", desc: "Зондирование до 1,5 км со сверхнизким уровнем шума." },
        ],
    },
    Category {
        slug: "geology",
        title: "Геология",
        services: &[
            Service { name: "Картирование и опробование", desc: "Определение литотипа, коры выветривания и QA/QC-контроль." },
            Service { name: "Керновой отбор", desc: "Удалённый ВОМ-зонд для непрерывного каротажа и описания керна." },
        ],
    },
    Category {
        slug: "modelling",
        title: "3-D модели и отчёты",
        services: &[
            Service { name: "Интеграция данных", desc: "Сводная модель Micromine — Leapfrog с веб-доступом." },
            Service {
                name: "Отчёты GKZ / JORC / PERC",
                desc: "Полная документация, готовая к защите в госкомиссиях и банках.",
            },
        ],
    },
];

/// Category for a tab slug; unknown slugs fall back to the first tab.
#[must_use]
pub fn category(slug: &str) -> &'static Category {
    CATEGORIES.iter().find(|c| c.slug == slug).unwrap_or(&CATEGORIES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_lookup_by_slug() {
        assert_eq!(category("geology").title, "Геология");
        assert_eq!(category("modelling").services.len(), 2);
    }

    #[test]
    fn unknown_slug_falls_back_to_first_tab() {
        assert_eq!(category("astrology").slug, "geophysics");
    }

    #[test]
    fn slugs_are_unique() {
        let mut slugs = CATEGORIES.iter().map(|c| c.slug).collect::<Vec<_>>();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), CATEGORIES.len());
    }
}
