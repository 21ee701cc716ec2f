//! Project showcase and its year filter.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub image: &'static str,
    pub title: &'static str,
    pub region: &'static str,
    pub year: u16,
    pub short: &'static str,
    pub description: &'static str,
}

impl Project {
    /// "Region, year" caption shown on cards and in the modal.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{}, {}", self.region, self.year)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "solar",
        image: "/assets/projects/solar.jpg",
        title: "В будущем будет название проекта",
        region: "Название региона",
        year: 2025,
        short: "Короткое",
        description: "Подробное описание",
    },
    Project {
        id: "tiger",
        image: "/assets/projects/tiger.jpg",
        title: "В будущем будет название проекта",
        region: "Название региона",
        year: 2024,
        short: "Короткое",
        description: "Подробное описание",
    },
    Project {
        id: "orlina",
        image: "/assets/projects/orlina.jpg",
        title: "В будущем будет название проекта",
        region: "Название региона",
        year: 2023,
        short: "Короткое",
        description: "Подробное описание",
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum YearFilter {
    #[default]
    All,
    Year(u16),
}

impl YearFilter {
    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Year(year) => project.year == year,
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("Все"),
            Self::Year(year) => write!(f, "{year}"),
        }
    }
}

/// "All" followed by every project year, newest first, without duplicates.
#[must_use]
pub fn year_filters() -> Vec<YearFilter> {
    let mut years = PROJECTS.iter().map(|p| p.year).collect::<Vec<_>>();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    std::iter::once(YearFilter::All)
        .chain(years.into_iter().map(YearFilter::Year))
        .collect()
}

#[must_use]
pub fn visible_projects(filter: YearFilter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_filters_start_with_all_then_newest_first() {
        assert_eq!(
            year_filters(),
            vec![YearFilter::All, YearFilter::Year(2025), YearFilter::Year(2024), YearFilter::Year(2023)]
        );
    }

    #[test]
    fn all_shows_every_project_and_a_year_narrows() {
        assert_eq!(visible_projects(YearFilter::All).len(), PROJECTS.len());
        let ids = visible_projects(YearFilter::Year(2024)).iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["tiger"]);
        assert!(visible_projects(YearFilter::Year(1999)).is_empty());
    }

    #[test]
    fn labels_and_caption() {
        assert_eq!(YearFilter::All.to_string(), "Все");
        assert_eq!(YearFilter::Year(2023).to_string(), "2023");
        assert_eq!(PROJECTS[0].caption(), "Название региона, 2025");
    }
}
