//! Vacancy catalog and the careers page filters.

/// Filter option meaning "no restriction".
pub const ANY: &str = "Все";

pub const INTERNSHIP_ID: &str = "internship";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vacancy {
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub employment: &'static str,
    pub short: &'static str,
    pub description: &'static str,
}

impl Vacancy {
    /// The internship card opens the intake wizard instead of details.
    #[must_use]
    pub fn is_internship(&self) -> bool {
        self.id == INTERNSHIP_ID
    }

    #[must_use]
    pub fn action_label(&self) -> &'static str {
        if self.is_internship() { "Подать заявку" } else { "Подробнее" }
    }
}

/// Regular vacancies followed by the internship.
pub const VACANCIES: &[Vacancy] = &[
    Vacancy {
        id: "geo-eng",
        title: "Ведущий геофизик",
        location: "Хабаровск",
        employment: "Полная занятость",
        short: "Полевые работы, интерпретация, отчёты.",
        description: "Требования:\n• профильное образование;\n• опыт 3+ года;\n• Micromine / Oasis.\n\n\
                      Условия:\n• вахта 30/30, ДМС;\n• премия за публикации.",
    },
    Vacancy {
        id: "drone-op",
        title: "Оператор БПЛА",
        location: "Выездные проекты",
        employment: "Проектная работа",
        short: "Съёмка данных дронами.",
        description: "Требования:\n• сертификат ГВП;\n• Pix4D / Agisoft;\n• готовность к экспедициям.",
    },
    Vacancy {
        id: "ts-frontend",
        title: "Frontend-разработчик (React+TS)",
        location: "Удалённо",
        employment: "Частичная занятость",
        short: "Развитие 3D-портала.",
        description: "Задачи:\n• компонентная библиотека;\n• WebGL-визуализация;\n• Storybook, CI/CD.",
    },
    Vacancy {
        id: INTERNSHIP_ID,
        title: "Студенческая практика — Геофизик-стажёр",
        location: "Хабаровск",
        employment: "Стажировка (оплачиваемая)",
        short: "Смены в поле + наставник, стипендия 25 000₽",
        description: "Студент получит:\n• участие в экспедиции;\n• доступ к данным;\n• диплом под научным \
                      руководством;\n• стажировку и перспективу трудоустройства.\n\nТребования:\n• 3–5 курс \
                      ГГФ/ФТИ;\n• базовые знания геофизики;\n• готовность к полю.",
    },
];

pub const LOCATIONS: &[&str] = &[ANY, "Хабаровск", "Выездные проекты", "Удалённо"];

pub const EMPLOYMENT_TYPES: &[&str] =
    &[ANY, "Полная занятость", "Проектная работа", "Частичная занятость", "Стажировка (оплачиваемая)"];

/// Current filter selection on the careers page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VacancyFilter {
    pub location: String,
    pub employment: String,
    pub search: String,
}

impl Default for VacancyFilter {
    fn default() -> Self {
        Self { location: ANY.to_owned(), employment: ANY.to_owned(), search: String::new() }
    }
}

impl VacancyFilter {
    /// Location and type match exactly unless set to [`ANY`]; the search
    /// text is a case-insensitive substring of the title.
    #[must_use]
    pub fn matches(&self, vacancy: &Vacancy) -> bool {
        let location_ok = self.location == ANY || vacancy.location == self.location;
        let employment_ok = self.employment == ANY || vacancy.employment == self.employment;
        let needle = self.search.trim().to_lowercase();
        location_ok && employment_ok && vacancy.title.to_lowercase().contains(&needle)
    }

    #[must_use]
    pub fn apply(&self, vacancies: &'static [Vacancy]) -> Vec<&'static Vacancy> {
        vacancies.iter().filter(|v| self.matches(v)).collect()
    }
}

#[must_use]
pub fn find_vacancy(id: &str) -> Option<&'static Vacancy> {
    VACANCIES.iter().find(|v| v.id == id)
}

#[cfg(test)]
#[path = "careers_test.rs"]
mod careers_test;
