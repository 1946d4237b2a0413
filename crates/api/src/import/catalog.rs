//! Content shipped with the original static site.

use geoline_core::content::ProjectStatus;

const WHATSAPP_LINK: &str =
    "https://api.whatsapp.com/send/?phone=994554110454&text&type=phone_number&app_absent=0";

const SERVICE_BLURB: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
    Phasellus nec pretium mi. Curabitur facilisis ornare velit non vulputate. \
    Aliquam metus tortor, auctor id gravida condimentum, viverra quis sem.";

const PROJECT_BLURB: &str = "Lorem ipsum dolor sit amet elit. Phasel nec pretium mi. \
    Curabit facilis ornare velit non. Aliqu metus tortor, auctor id gravi condime, \
    viverra quis sem.";

const POST_EXCERPT: &str = "Lorem ipsum dolor sit amet elit. Phasellus nec pretium mi. \
    Curabitur facilisis ornare velit non vulputate. Aliquam metus tortor";

pub struct SlideEntry {
    pub file: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button_text: &'static str,
    pub button_link: &'static str,
    pub order: i32,
}

pub struct ServiceEntry {
    pub file: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub order: i32,
}

pub struct ProjectEntry {
    pub file: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: ProjectStatus,
    pub order: i32,
}

pub struct PostEntry {
    pub file: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub category: &'static str,
}

pub struct PartnerEntry {
    pub file: &'static str,
    pub name: &'static str,
    pub website_url: Option<&'static str>,
    pub order: i32,
}

pub struct LicenseEntry {
    pub file: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub order: i32,
}

pub struct StatisticEntry {
    pub label: &'static str,
    pub value: i32,
    pub icon: &'static str,
    pub order: i32,
}

pub struct ContactEntry {
    pub info_type: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub order: i32,
}

pub struct AboutEntry {
    pub file: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

const fn slide(file: &'static str, title: &'static str, subtitle: &'static str, order: i32) -> SlideEntry {
    SlideEntry {
        file,
        title,
        subtitle,
        button_text: "Əlaqə",
        button_link: WHATSAPP_LINK,
        order,
    }
}

const fn service(file: &'static str, title: &'static str, order: i32) -> ServiceEntry {
    ServiceEntry {
        file,
        title,
        description: SERVICE_BLURB,
        order,
    }
}

const fn project(
    file: &'static str,
    title: &'static str,
    status: ProjectStatus,
    order: i32,
) -> ProjectEntry {
    ProjectEntry {
        file,
        title,
        description: PROJECT_BLURB,
        status,
        order,
    }
}

const fn post(file: &'static str, title: &'static str) -> PostEntry {
    PostEntry {
        file,
        title,
        excerpt: POST_EXCERPT,
        author: "Admin",
        category: "Construction",
    }
}

pub const SLIDES: &[SlideEntry] = &[
    slide("carousel-1.jpg", "Biz bu işin peşəkarlarıyıq", "Xəyal etdiyiniz layihələr üçün", 0),
    slide("carousel-2.jpg", "Peşəkar ölçülər", "Xəyallarınızı gerçəyləşdiririk", 1),
    slide("flametowers2.jpg", "Bizə güvənə bilərsiz", "Nəticələrimiz göz qabagında", 2),
    slide("carousel-3.jpeg", "Bizə güvənə bilərsiz", "Nəticələrimiz göz qabagında", 3),
    slide("carousel-4.jpg", "Bizə güvənə bilərsiz", "Nəticələrimiz göz qabagında", 4),
    slide("carousel-5.jpg", "Bizə güvənə bilərsiz", "Nəticələrimiz göz qabagında", 5),
];

pub const SERVICES: &[ServiceEntry] = &[
    service("service-1.jpeg", "Batimetriya tədqiqatları", 0),
    service("service-2.jpeg", "SONAR planaalma", 1),
    service("service-3.jpeg", "Suda 3D modellərin qurulması", 2),
    service("service-4.jpg", "Su, sahil və səviyyə ölçmələri", 3),
    service("service-5.jpg", "Xəritə və modellərin tərtib edilməsi", 4),
    service("service-6.jpg", "Su obyektlərində dinamik dəyişmə", 5),
    service("service-id.jpg", "Akustik təsvirlər", 6),
    service("service-id2.jpg", "Subasma sahələrin müəyyənləşdirilməsi", 7),
    service("service-id3.jpg", "İnventarizasiya və təsnifat", 8),
];

pub const PROJECTS: &[ProjectEntry] = &[
    project("azure1.jpeg", "Port d Azure Layihəsi", ProjectStatus::Completed, 0),
    project("azure2.jpeg", "Port d Azure Layihəsi", ProjectStatus::InProgress, 1),
    project("nardaran1.jpeg", "Nardaran İnvest Aypara Layihəsi", ProjectStatus::Future, 2),
    project("portfolio-4.jpg", "Project Name", ProjectStatus::Completed, 3),
    project("portfolio-5.jpg", "Project Name", ProjectStatus::InProgress, 4),
    project("portfolio-6.jpg", "Project Name", ProjectStatus::Future, 5),
];

pub const POSTS: &[PostEntry] = &[
    post("azure1.jpeg", "Port d Azure Layihəsi"),
    post("azure2.jpeg", "Port d Azure Layihəsi"),
    post("nardaran1.jpeg", "Aypara Layihəsi"),
];

pub const PARTNERS: &[PartnerEntry] = &[PartnerEntry {
    file: "kolida.jpeg",
    name: "Kolida",
    website_url: None,
    order: 0,
}];

pub const LICENSES: &[LicenseEntry] = &[
    LicenseEntry {
        file: "license1.png",
        title: "Lisenziya 1",
        description: "GeoLine Engineering lisenziyası",
        order: 0,
    },
    LicenseEntry {
        file: "license2.png",
        title: "Lisenziya 2",
        description: "GeoLine Engineering lisenziyası",
        order: 1,
    },
];

pub const STATISTICS: &[StatisticEntry] = &[
    StatisticEntry { label: "Peşəkar Heyətimiz", value: 109, icon: "flaticon-worker", order: 0 },
    StatisticEntry { label: "Xoşbəxt Müştərilərimiz", value: 485, icon: "flaticon-building", order: 1 },
    StatisticEntry { label: "Bitirilən Layihələr", value: 789, icon: "flaticon-address", order: 2 },
    StatisticEntry { label: "Aktiv Layihələr", value: 890, icon: "flaticon-crane", order: 3 },
];

pub const CONTACT_INFO: &[ContactEntry] = &[
    ContactEntry {
        info_type: "hours",
        label: "İş Saatları",
        value: "Bazar ertəsi - Şənbə, 9:00 - 18:00",
        icon: "flaticon-calendar",
        order: 0,
    },
    ContactEntry {
        info_type: "phone",
        label: "Əlaqə",
        value: "+994 55 411 04 54",
        icon: "flaticon-call",
        order: 1,
    },
    ContactEntry {
        info_type: "email",
        label: "E-poçt",
        value: "geolineazmmc@gmail.com",
        icon: "flaticon-send-mail",
        order: 2,
    },
    ContactEntry {
        info_type: "whatsapp",
        label: "WhatsApp",
        value: "+994 55 411 04 54",
        icon: "flaticon-call",
        order: 3,
    },
];

pub const ABOUT: AboutEntry = AboutEntry {
    file: "flametowers.jpg",
    title: "25 İllik təcrübə",
    subtitle: "GeoLine-a xoş gəlmisiniz",
    description: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Phasellus nec \
        pretium mi. Curabitur facilisis ornare velit non vulputate. Aliquam metus tortor, \
        auctor id gravida condimentum, viverra quis sem. Curabitur non nisl nec nisi \
        scelerisque maximus. Aenean consectetur convallis porttitor. Aliquam interdum at \
        lacus non blandit.",
};
