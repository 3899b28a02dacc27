//! The full content context embedded into the rendered page.
//!
//! Persistence models are converted into these presentation shapes: media
//! paths become public URLs through the configured storage backend and the
//! admin's newline/comma-delimited text fields become lists.

use anyhow::Result;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::{Config, StorageBackend};
use crate::domains::content::models::{
    AboutSection, GalleryImage, HeroImage, ImpactResult, NewsletterContent, Service, SiteSettings,
    Testimonial,
};

#[derive(Debug, Clone, Serialize)]
pub struct SiteSettingsData {
    pub site_name: String,
    pub logo_url: Option<String>,
    pub contact_email: String,
    pub contact_phone: String,
}

impl SiteSettingsData {
    fn from_model(settings: SiteSettings, storage: &StorageBackend) -> Self {
        Self {
            logo_url: settings.logo.as_deref().map(|p| storage.url_for(p)),
            site_name: settings.site_name,
            contact_email: settings.contact_email,
            contact_phone: settings.contact_phone,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroImageData {
    pub id: Uuid,
    pub title: String,
    pub image_url: String,
    pub position: String,
}

impl HeroImageData {
    fn from_model(hero: HeroImage, storage: &StorageBackend) -> Self {
        Self {
            id: hero.id,
            image_url: storage.url_for(&hero.image),
            title: hero.title,
            position: hero.position,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutSectionData {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub bullet_points: Vec<String>,
}

impl AboutSectionData {
    fn from_model(about: AboutSection, storage: &StorageBackend) -> Self {
        Self {
            bullet_points: about.bullet_points_list(),
            image_url: about.image.as_deref().map(|p| storage.url_for(p)),
            title: about.title,
            content: about.content,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceData {
    pub id: Uuid,
    pub title: String,
    pub service_type: String,
    pub description: String,
    pub icon: String,
    pub topics: Vec<String>,
    pub button_text: String,
}

impl From<Service> for ServiceData {
    fn from(service: Service) -> Self {
        Self {
            topics: service.topics_list(),
            id: service.id,
            title: service.title,
            service_type: service.service_type,
            description: service.description,
            icon: service.icon,
            button_text: service.button_text,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactResultData {
    pub id: Uuid,
    pub title: String,
    pub value: String,
}

impl From<ImpactResult> for ImpactResultData {
    fn from(result: ImpactResult) -> Self {
        Self {
            id: result.id,
            title: result.title,
            value: result.value,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryImageData {
    pub id: Uuid,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub position: String,
}

impl GalleryImageData {
    fn from_model(image: GalleryImage, storage: &StorageBackend) -> Self {
        Self {
            id: image.id,
            image_url: storage.url_for(&image.image),
            title: image.title,
            description: image.description,
            position: image.position,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialData {
    pub id: Uuid,
    pub client_name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub avatar_url: Option<String>,
}

impl TestimonialData {
    fn from_model(testimonial: Testimonial, storage: &StorageBackend) -> Self {
        Self {
            id: testimonial.id,
            avatar_url: testimonial.avatar.as_deref().map(|p| storage.url_for(p)),
            client_name: testimonial.client_name,
            position: testimonial.position,
            company: testimonial.company,
            content: testimonial.content,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsletterContentData {
    pub title: String,
    pub subtitle: String,
    pub image_url: Option<String>,
    pub benefits: Vec<String>,
    pub pdf_url: Option<String>,
}

impl NewsletterContentData {
    fn from_model(newsletter: NewsletterContent, storage: &StorageBackend) -> Self {
        Self {
            benefits: newsletter.benefits_list(),
            image_url: newsletter.image.as_deref().map(|p| storage.url_for(p)),
            pdf_url: newsletter.pdf_file.as_deref().map(|p| storage.url_for(p)),
            title: newsletter.title,
            subtitle: newsletter.subtitle,
        }
    }
}

/// Everything the page embeds. Every list holds only active records, already
/// in display order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageContext {
    pub site_settings: Option<SiteSettingsData>,
    pub hero_images: Vec<HeroImageData>,
    pub about_section: Option<AboutSectionData>,
    pub services: Vec<ServiceData>,
    pub results: Vec<ImpactResultData>,
    pub gallery_images: Vec<GalleryImageData>,
    pub testimonials: Vec<TestimonialData>,
    pub newsletter: Option<NewsletterContentData>,
}

impl PageContext {
    /// Gather every content slice for one page render.
    pub async fn load(pool: &PgPool, config: &Config) -> Result<Self> {
        let storage = &config.storage;

        let site_settings = SiteSettings::find(pool)
            .await?
            .map(|s| SiteSettingsData::from_model(s, storage));
        let hero_images = HeroImage::find_active(pool)
            .await?
            .into_iter()
            .map(|h| HeroImageData::from_model(h, storage))
            .collect();
        let about_section = AboutSection::find_active(pool)
            .await?
            .map(|a| AboutSectionData::from_model(a, storage));
        let services = Service::find_active(pool)
            .await?
            .into_iter()
            .map(ServiceData::from)
            .collect();
        let results = ImpactResult::find_active(pool)
            .await?
            .into_iter()
            .map(ImpactResultData::from)
            .collect();
        let gallery_images = GalleryImage::find_active(config.gallery_preview_limit, pool)
            .await?
            .into_iter()
            .map(|g| GalleryImageData::from_model(g, storage))
            .collect();
        let testimonials = Testimonial::find_active(pool)
            .await?
            .into_iter()
            .map(|t| TestimonialData::from_model(t, storage))
            .collect();
        let newsletter = NewsletterContent::find_active(pool)
            .await?
            .map(|n| NewsletterContentData::from_model(n, storage));

        Ok(Self {
            site_settings,
            hero_images,
            about_section,
            services,
            results,
            gallery_images,
            testimonials,
            newsletter,
        })
    }
}
