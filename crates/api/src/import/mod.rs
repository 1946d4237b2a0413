//! One-off import of the static site's images and copy into the CMS.
//!
//! Every section is idempotent: an entry is skipped when its source image is
//! missing or a row already references a file of the same name (statistics
//! and contact details are matched on their label instead). Each section
//! runs in its own transaction, so a failing section leaves the ones before
//! it committed.

pub mod catalog;

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use geoline_core::upload::UploadStore;
use geoline_db::models::about::CreateAboutContent;
use geoline_db::models::blog::CreateBlogPost;
use geoline_db::models::carousel::CreateCarouselSlide;
use geoline_db::models::contact::CreateContactInfo;
use geoline_db::models::license::CreateLicense;
use geoline_db::models::partner::CreatePartner;
use geoline_db::models::portfolio::CreatePortfolioProject;
use geoline_db::models::service::CreateService;
use geoline_db::models::statistic::CreateStatistic;
use geoline_db::repositories::{
    AboutRepo, BlogRepo, CarouselRepo, ContactInfoRepo, LicenseRepo, PartnerRepo, PortfolioRepo,
    ServiceRepo, StatisticRepo,
};
use geoline_db::DbPool;

/// Rows inserted per section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub carousel: usize,
    pub services: usize,
    pub portfolio: usize,
    pub blog: usize,
    pub partners: usize,
    pub licenses: usize,
    pub statistics: usize,
    pub contact_info: usize,
    pub about: usize,
}

/// Copies catalogue images from `img_dir` into the upload store and inserts
/// the matching rows.
pub struct Importer<'a> {
    pool: &'a DbPool,
    uploads: &'a UploadStore,
    img_dir: PathBuf,
}

impl<'a> Importer<'a> {
    pub fn new(pool: &'a DbPool, uploads: &'a UploadStore, img_dir: impl Into<PathBuf>) -> Self {
        Self {
            pool,
            uploads,
            img_dir: img_dir.into(),
        }
    }

    /// Run every section in order, stopping at the first failure.
    pub async fn run(&self) -> anyhow::Result<ImportSummary> {
        let summary = ImportSummary {
            carousel: self.carousel().await.context("carousel import failed")?,
            services: self.services().await.context("services import failed")?,
            portfolio: self.portfolio().await.context("portfolio import failed")?,
            blog: self.blog().await.context("blog import failed")?,
            partners: self.partners().await.context("partners import failed")?,
            licenses: self.licenses().await.context("licenses import failed")?,
            statistics: self.statistics().await.context("statistics import failed")?,
            contact_info: self
                .contact_info()
                .await
                .context("contact info import failed")?,
            about: self.about().await.context("about import failed")?,
        };
        Ok(summary)
    }

    /// Source path of a catalogue image, if it is present on disk.
    async fn source(&self, file: &str) -> Option<PathBuf> {
        let path = self.img_dir.join(file);
        match tokio::fs::try_exists(&path).await {
            Ok(true) => Some(path),
            _ => {
                tracing::debug!(file, "Source image missing, skipping");
                None
            }
        }
    }

    async fn copy(&self, source: &Path, subdir: &str, file: &str) -> anyhow::Result<String> {
        self.uploads
            .copy_into(source, subdir, file)
            .await
            .with_context(|| format!("failed to copy {}", source.display()))
    }

    pub async fn carousel(&self) -> anyhow::Result<usize> {
        let mut tx = self.pool.begin().await?;
        let mut count = 0;
        for entry in catalog::SLIDES {
            let Some(source) = self.source(entry.file).await else {
                continue;
            };
            if CarouselRepo::image_exists(&mut *tx, entry.file).await? {
                continue;
            }
            let image_path = self.copy(&source, "carousel", entry.file).await?;
            CarouselRepo::create(
                &mut *tx,
                &CreateCarouselSlide {
                    title: entry.title.into(),
                    subtitle: Some(entry.subtitle.into()),
                    image_path,
                    button_text: Some(entry.button_text.into()),
                    button_link: Some(entry.button_link.into()),
                    sort_order: Some(entry.order),
                    is_active: Some(true),
                },
            )
            .await?;
            count += 1;
        }
        tx.commit().await?;
        tracing::info!(count, "Imported carousel slides");
        Ok(count)
    }

    pub async fn services(&self) -> anyhow::Result<usize> {
        let mut tx = self.pool.begin().await?;
        let mut count = 0;
        for entry in catalog::SERVICES {
            let Some(source) = self.source(entry.file).await else {
                continue;
            };
            if ServiceRepo::image_exists(&mut *tx, entry.file).await? {
                continue;
            }
            let image_path = self.copy(&source, "services", entry.file).await?;
            ServiceRepo::create(
                &mut *tx,
                &CreateService {
                    title: entry.title.into(),
                    description: Some(entry.description.into()),
                    image_path,
                    images: None,
                    video_url: None,
                    sort_order: Some(entry.order),
                    is_active: Some(true),
                },
            )
            .await?;
            count += 1;
        }
        tx.commit().await?;
        tracing::info!(count, "Imported services");
        Ok(count)
    }

    pub async fn portfolio(&self) -> anyhow::Result<usize> {
        let mut tx = self.pool.begin().await?;
        let mut count = 0;
        for entry in catalog::PROJECTS {
            let Some(source) = self.source(entry.file).await else {
                continue;
            };
            if PortfolioRepo::image_exists(&mut *tx, entry.file).await? {
                continue;
            }
            let image_path = self.copy(&source, "portfolio", entry.file).await?;
            PortfolioRepo::create(
                &mut *tx,
                &CreatePortfolioProject {
                    title: entry.title.into(),
                    description: Some(entry.description.into()),
                    image_path,
                    status: Some(entry.status),
                    sort_order: Some(entry.order),
                    is_active: Some(true),
                },
            )
            .await?;
            count += 1;
        }
        tx.commit().await?;
        tracing::info!(count, "Imported portfolio projects");
        Ok(count)
    }

    /// Catalogue posts are imported already published.
    pub async fn blog(&self) -> anyhow::Result<usize> {
        let mut tx = self.pool.begin().await?;
        let mut count = 0;
        for entry in catalog::POSTS {
            let Some(source) = self.source(entry.file).await else {
                continue;
            };
            if BlogRepo::image_exists(&mut *tx, entry.file).await? {
                continue;
            }
            let image_path = self.copy(&source, "blog", entry.file).await?;
            BlogRepo::create(
                &mut *tx,
                &CreateBlogPost {
                    title: entry.title.into(),
                    excerpt: Some(entry.excerpt.into()),
                    content: Some(entry.excerpt.into()),
                    image_path: Some(image_path),
                    author: Some(entry.author.into()),
                    category: Some(entry.category.into()),
                    is_published: Some(true),
                    published_at: Some(Utc::now()),
                },
            )
            .await?;
            count += 1;
        }
        tx.commit().await?;
        tracing::info!(count, "Imported blog posts");
        Ok(count)
    }

    pub async fn partners(&self) -> anyhow::Result<usize> {
        let mut tx = self.pool.begin().await?;
        let mut count = 0;
        for entry in catalog::PARTNERS {
            let Some(source) = self.source(entry.file).await else {
                continue;
            };
            if PartnerRepo::image_exists(&mut *tx, entry.file).await? {
                continue;
            }
            let image_path = self.copy(&source, "partners", entry.file).await?;
            PartnerRepo::create(
                &mut *tx,
                &CreatePartner {
                    name: entry.name.into(),
                    image_path,
                    website_url: entry.website_url.map(str::to_string),
                    sort_order: Some(entry.order),
                    is_active: Some(true),
                },
            )
            .await?;
            count += 1;
        }
        tx.commit().await?;
        tracing::info!(count, "Imported partners");
        Ok(count)
    }

    pub async fn licenses(&self) -> anyhow::Result<usize> {
        let mut tx = self.pool.begin().await?;
        let mut count = 0;
        for entry in catalog::LICENSES {
            let Some(source) = self.source(entry.file).await else {
                continue;
            };
            if LicenseRepo::image_exists(&mut *tx, entry.file).await? {
                continue;
            }
            let image_path = self.copy(&source, "licenses", entry.file).await?;
            LicenseRepo::create(
                &mut *tx,
                &CreateLicense {
                    title: entry.title.into(),
                    image_path,
                    description: Some(entry.description.into()),
                    sort_order: Some(entry.order),
                    is_active: Some(true),
                },
            )
            .await?;
            count += 1;
        }
        tx.commit().await?;
        tracing::info!(count, "Imported licenses");
        Ok(count)
    }

    pub async fn statistics(&self) -> anyhow::Result<usize> {
        let mut tx = self.pool.begin().await?;
        let mut count = 0;
        for entry in catalog::STATISTICS {
            if StatisticRepo::label_exists(&mut *tx, entry.label).await? {
                continue;
            }
            StatisticRepo::create(
                &mut *tx,
                &CreateStatistic {
                    label: entry.label.into(),
                    value: entry.value,
                    icon: Some(entry.icon.into()),
                    sort_order: Some(entry.order),
                    is_active: Some(true),
                },
            )
            .await?;
            count += 1;
        }
        tx.commit().await?;
        tracing::info!(count, "Imported statistics");
        Ok(count)
    }

    pub async fn contact_info(&self) -> anyhow::Result<usize> {
        let mut tx = self.pool.begin().await?;
        let mut count = 0;
        for entry in catalog::CONTACT_INFO {
            if ContactInfoRepo::exists(&mut *tx, entry.info_type, entry.label).await? {
                continue;
            }
            ContactInfoRepo::create(
                &mut *tx,
                &CreateContactInfo {
                    info_type: entry.info_type.into(),
                    label: entry.label.into(),
                    value: entry.value.into(),
                    icon: Some(entry.icon.into()),
                    sort_order: Some(entry.order),
                    is_active: Some(true),
                },
            )
            .await?;
            count += 1;
        }
        tx.commit().await?;
        tracing::info!(count, "Imported contact info items");
        Ok(count)
    }

    pub async fn about(&self) -> anyhow::Result<usize> {
        let entry = &catalog::ABOUT;
        let Some(source) = self.source(entry.file).await else {
            return Ok(0);
        };

        let mut tx = self.pool.begin().await?;
        if AboutRepo::image_exists(&mut *tx, entry.file).await? {
            tracing::info!("About content already exists");
            return Ok(0);
        }
        let image_path = self.copy(&source, "about", entry.file).await?;
        AboutRepo::create(
            &mut *tx,
            &CreateAboutContent {
                title: entry.title.into(),
                subtitle: Some(entry.subtitle.into()),
                description: Some(entry.description.into()),
                image_path: Some(image_path),
                is_active: Some(true),
            },
        )
        .await?;
        tx.commit().await?;
        tracing::info!("Imported about content");
        Ok(1)
    }
}
