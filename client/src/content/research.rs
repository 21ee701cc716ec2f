//! Research output: patents, articles and reports.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResearchTab {
    #[default]
    Patents,
    Articles,
    Reports,
}

impl ResearchTab {
    pub const ALL: [Self; 3] = [Self::Patents, Self::Articles, Self::Reports];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Patents => "Патенты",
            Self::Articles => "Статьи",
            Self::Reports => "Отчёты",
        }
    }

    #[must_use]
    pub fn documents(self) -> &'static [ResearchDoc] {
        match self {
            Self::Patents => PATENTS,
            Self::Articles => ARTICLES,
            Self::Reports => REPORTS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResearchDoc {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub file: &'static str,
    pub desc: Option<&'static str>,
    pub journal: Option<&'static str>,
}

impl ResearchDoc {
    /// Date, plus the journal when there is one.
    #[must_use]
    pub fn meta_line(&self) -> String {
        match self.journal {
            Some(journal) => format!("{} · {journal}", self.date),
            None => self.date.to_owned(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> &'static str {
        self.desc.unwrap_or("Аннотация будет добавлена")
    }
}

pub const PATENTS: &[ResearchDoc] = &[
    ResearchDoc {
        id: "pat-1",
        title: "Патент №1234567: способ высокоточного картирования",
        date: "15.10.2024",
        file: "/assets/docs/patent-1.pdf",
        desc: Some("Методика комплексной обработки данных сейсмо- и электроразведки."),
        journal: None,
    },
    ResearchDoc {
        id: "pat-2",
        title: "Патент №7654321: система IP-томографии",
        date: "07.01.2025",
        file: "/assets/docs/patent-2.pdf",
        desc: Some("Инверсия с обратной связью по блок-модели."),
        journal: None,
    },
];

pub const ARTICLES: &[ResearchDoc] = &[
    ResearchDoc {
        id: "art-1",
        title: "Новые подходы к IP-томографии",
        date: "20.08.2024",
        file: "/assets/docs/article-ip.pdf",
        desc: None,
        journal: Some("Geophysics Today"),
    },
    ResearchDoc {
        id: "art-2",
        title: "3-D моделирование коренных руд",
        date: "11.11.2024",
        file: "/assets/docs/article-rud.pdf",
        desc: None,
        journal: Some("Mining Magazine"),
    },
];

pub const REPORTS: &[ResearchDoc] = &[
    ResearchDoc {
        id: "rep-1",
        title: "Отчёт по сейсморазведке 2023",
        date: "30.06.2023",
        file: "/assets/docs/report-seis.pdf",
        desc: Some("Комплексный отчёт по полевым работам в Хабаровском крае."),
        journal: None,
    },
    ResearchDoc {
        id: "rep-2",
        title: "Отчёт по гравиметрическим исследованиям",
        date: "15.12.2023",
        file: "/assets/docs/report-grav.pdf",
        desc: Some("Результаты мониторинга гравполя."),
        journal: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_tab_has_its_own_documents() {
        assert_eq!(ResearchTab::Patents.documents()[0].id, "pat-1");
        assert_eq!(ResearchTab::Articles.documents()[1].id, "art-2");
        assert_eq!(ResearchTab::Reports.documents().len(), 2);
    }

    #[test]
    fn meta_line_appends_journal() {
        assert_eq!(ARTICLES[0].meta_line(), "20.08.2024 · Geophysics Today");
        assert_eq!(PATENTS[0].meta_line(), "15.10.2024");
    }

    #[test]
    fn summary_has_placeholder_for_missing_abstract() {
        assert_eq!(ARTICLES[0].summary(), "Аннотация будет добавлена");
        assert_eq!(REPORTS[1].summary(), "Результаты мониторинга гравполя.");
    }
}
