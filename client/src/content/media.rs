//! Media center: news cards, the photo gallery and downloadable documents.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MediaTab {
    #[default]
    News,
    Photo,
    Docs,
}

impl MediaTab {
    pub const ALL: [Self; 3] = [Self::News, Self::Photo, Self::Docs];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::News => "Новости",
            Self::Photo => "Фото",
            Self::Docs => "Документы",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub date: &'static str,
    pub desc: &'static str,
    pub link: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Photo {
    pub id: u32,
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Copy, Debug)]
pub struct Document {
    pub name: &'static str,
    pub url: &'static str,
}

pub const DOCUMENTS: &[Document] = &[
    Document { name: "Годовой отчёт 2024.pdf", url: "/assets/docs/report-2024.pdf" },
    Document { name: "Презентация компании.pptx", url: "/assets/docs/presentation.pptx" },
];

const PHOTO_COUNT: u32 = 12;
const PLACEHOLDER_NEWS: u32 = 4;

/// The launch article first, then the placeholder feed.
#[must_use]
pub fn news() -> Vec<NewsItem> {
    let launch = NewsItem {
        title: super::company::EXPEDITION_LAUNCH.title.to_owned(),
        date: super::company::EXPEDITION_LAUNCH.date,
        desc: "Мы запустили обновлённый корпоративный сайт: услуги, проекты и научная деятельность в одном месте.",
        link: "/news/expedition-launch",
    };
    std::iter::once(launch)
        .chain((1..=PLACEHOLDER_NEWS).map(|i| NewsItem {
            title: format!("Заголовок новости №{i}"),
            date: "12.03.2025",
            desc: "Краткое описание новости. Оно не слишком длинное, но информативное.",
            link: "#",
        }))
        .collect()
}

/// Season 2024 field photos.
#[must_use]
pub fn photos() -> Vec<Photo> {
    (1..=PHOTO_COUNT)
        .map(|id| Photo {
            id,
            src: format!("/assets/photos/season-2024/IMG_61{}.JPG", 9 + id),
            alt: format!("Фотография {id}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_default_to_news() {
        assert_eq!(MediaTab::default(), MediaTab::News);
        let labels = MediaTab::ALL.map(MediaTab::label);
        assert_eq!(labels, ["Новости", "Фото", "Документы"]);
    }

    #[test]
    fn news_leads_with_the_launch_article() {
        let items = news();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].link, "/news/expedition-launch");
        assert_eq!(items[4].title, "Заголовок новости №4");
    }

    #[test]
    fn photo_paths_follow_camera_numbering() {
        let all = photos();
        assert_eq!(all.len(), 12);
        assert_eq!(all[0].src, "/assets/photos/season-2024/IMG_6110.JPG");
        assert_eq!(all[11].src, "/assets/photos/season-2024/IMG_6121.JPG");
        assert_eq!(all[11].alt, "Фотография 12");
    }
}
