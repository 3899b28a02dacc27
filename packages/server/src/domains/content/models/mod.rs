// Content models - SQL persistence layer

pub mod about_section;
pub mod gallery_image;
pub mod hero_image;
pub mod impact_result;
pub mod newsletter_content;
pub mod service;
pub mod site_settings;
pub mod testimonial;

pub use about_section::AboutSection;
pub use gallery_image::GalleryImage;
pub use hero_image::HeroImage;
pub use impact_result::ImpactResult;
pub use newsletter_content::NewsletterContent;
pub use service::Service;
pub use site_settings::SiteSettings;
pub use testimonial::Testimonial;
