//! Company facts shared by the footer, home, about, contacts and news pages.

pub const COMPANY_NAME: &str = "ООО «Тектоника»";
pub const BRAND: &str = "ТЕКТОНИКА";

pub const ADDRESS: &str = "г. Хабаровск, ул. Ким Ю Чена, 65, офис 326";
pub const PHONE_DISPLAY: &str = "+7 984 262-61-15";
pub const PHONE_HREF: &str = "tel:+79842626115";
pub const EMAIL: &str = "tektonikayur16@gmail.com";
pub const EMAIL_HREF: &str = "mailto:tektonikayur16@gmail.com";
pub const MAP_WIDGET_URL: &str = "https://yandex.ru/map-widget/v1/?ll=135.077783%2C48.488285&z=17&pt=135.077783,48.488285,pm2rdl";

pub const FOOTER_BLURB: &str =
    "Ведущий эксперт в области геофизических исследований. От фундамента к звёздам: наши технологии открывают недра планеты.";

pub const ABOUT_DESCRIPTION: &str = "ООО «Тектоника» — молодая геофизическая компания из Хабаровска. Мы выполняем \
     геолого-разведочные, геофизические и геохимические работы, обеспечивая заказчиков достоверными данными о недрах.";

#[derive(Clone, Copy, Debug)]
pub struct Tile {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const COMPETENCIES: &[Tile] = &[
    Tile { icon: "🛰️", title: "Геофизика", desc: "Сейсмо-, магнито- и электроразведка" },
    Tile { icon: "⛏️", title: "Геология", desc: "Полевые партии, QA/QC-контроль" },
    Tile { icon: "📊", title: "3-D модели", desc: "Единая геолого-геофизическая модель" },
    Tile { icon: "🚁", title: "Дроны / БПЛА", desc: "Высотная аэрофотосъёмка" },
    Tile { icon: "📐", title: "Топография", desc: "Лазерное сканирование рельефа" },
    Tile { icon: "📑", title: "Отчётность", desc: "GKZ, JORC, PERC, аудит" },
];

#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub label: &'static str,
    pub value: u32,
}

pub const HOME_STATS: &[Stat] = &[
    Stat { label: "проектов", value: 220 },
    Stat { label: "клиентов", value: 130 },
    Stat { label: "лет опыта", value: 3 },
];

#[derive(Clone, Copy, Debug)]
pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
}

pub const FACTS: &[Fact] = &[
    Fact { label: "Год основания", value: "2023" },
    Fact { label: "Уставный капитал", value: "16 000 ₽" },
    Fact { label: "Основной ОКВЭД", value: "71.12.3" },
    Fact { label: "Видов деятельности", value: "23" },
];

pub const ACTIVITIES: &[&str] = &[
    "Полевые геофизические работы (сейсмо-, магнито- и электроразведка)",
    "Геохимические исследования",
    "3-D интерпретация и моделирование",
    "Отчётность по российским и международным стандартам",
];

#[derive(Clone, Copy, Debug)]
pub struct Milestone {
    pub year: u16,
    pub text: &'static str,
}

pub const MILESTONES: &[Milestone] = &[Milestone {
    year: 2023,
    text: "Регистрация компании в ЕГРЮЛ и получение первого геофизического контракта",
}];

pub const BENEFITS: &[Tile] = &[
    Tile { icon: "❤️", title: "Работа с душой", desc: "Дружная команда и поддержка каждого проекта." },
    Tile { icon: "🎁", title: "Бонусы и ДМС", desc: "Соцпакет, медицинское страхование и премии." },
    Tile { icon: "📚", title: "Обучение", desc: "Курсы, конференции и поддержка профессионального роста." },
    Tile { icon: "🎓", title: "Стажировка", desc: "Практика с реальными данными под руководством экспертов." },
];

/// The single news article.
pub struct Article {
    pub title: &'static str,
    pub date: &'static str,
    pub hero: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const EXPEDITION_LAUNCH: Article = Article {
    title: "Открытие нашего портала!",
    date: "01.07.2025",
    hero: "/assets/abouthero-bg.jpg",
    paragraphs: &[
        "Мы рады представить обновлённый корпоративный сайт компании «Тектоника». На нём собрана вся информация об \
         услугах, реализованных проектах и нашей научной деятельности.",
        "Запуская портал, мы стремились сделать его максимально удобным для заказчиков. Теперь вы можете быстро \
         получить сведения о наших компетенциях и оставить заявку на консультацию прямо на сайте.",
        "Сайт будет регулярно пополняться новыми материалами. Следите за обновлениями и присоединяйтесь к нам в \
         путешествии по миру геофизики.",
    ],
};
