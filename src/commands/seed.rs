//! Seed command - admin account and demo catalog.
//!
//! Idempotent: an existing admin is left untouched and a table that
//! already holds rows is skipped.

use std::sync::Arc;

use crate::cli::args::SeedArgs;
use crate::config::{Config, DEFAULT_ADMIN_PASSWORD};
use crate::domain::{NewOffer, NewTestimonial, ServiceInput, StylistInput};
use crate::errors::AppResult;
use crate::infra::{Database, Persistence, UnitOfWork};
use crate::services::{AuthService, Authenticator};

/// Rows inserted per table by [`seed_catalog`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub services: usize,
    pub stylists: usize,
    pub testimonials: usize,
    pub offers: usize,
}

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let uow = Arc::new(Persistence::new(db.get_connection()));

    if uow.users().find_by_username(&args.admin_username).await?.is_some() {
        tracing::info!(username = %args.admin_username, "Admin user already exists");
    } else {
        if args.admin_password == DEFAULT_ADMIN_PASSWORD {
            tracing::warn!("Creating admin with the default password; change it before going live");
        }
        let auth = Authenticator::new(uow.clone(), config);
        let identity = auth
            .create_admin(&args.admin_username, &args.admin_password)
            .await?;
        tracing::info!(username = %identity.username(), "Admin user created");
    }

    if args.skip_catalog {
        return Ok(());
    }

    let report = seed_catalog(uow.as_ref()).await?;
    tracing::info!(
        services = report.services,
        stylists = report.stylists,
        testimonials = report.testimonials,
        offers = report.offers,
        "Demo catalog seeded"
    );

    Ok(())
}

/// Insert the demo catalog into every empty catalog table.
pub async fn seed_catalog<U: UnitOfWork + ?Sized>(uow: &U) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();

    if uow.services().count().await? == 0 {
        for service in demo_services() {
            uow.services().create(service).await?;
            report.services += 1;
        }
    }

    if uow.stylists().count().await? == 0 {
        for stylist in demo_stylists() {
            uow.stylists().create(stylist).await?;
            report.stylists += 1;
        }
    }

    if uow.testimonials().count().await? == 0 {
        for testimonial in demo_testimonials() {
            uow.testimonials().create(testimonial).await?;
            report.testimonials += 1;
        }
    }

    if uow.offers().count().await? == 0 {
        for offer in demo_offers() {
            uow.offers().create(offer).await?;
            report.offers += 1;
        }
    }

    Ok(report)
}

fn unsplash(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/{}?auto=format&fit=crop&w=500&q=60",
        photo
    )
}

fn demo_services() -> Vec<ServiceInput> {
    let service = |title: &str,
                   description: &str,
                   category: &str,
                   price_cents: i64,
                   duration_minutes: i32,
                   photo: &str,
                   featured: bool| {
        ServiceInput {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            price_cents,
            duration_minutes,
            image: unsplash(photo),
            featured,
        }
    };

    vec![
        service(
            "Classic Haircut",
            "Expert cut and style tailored to you.",
            "Hair",
            4500,
            45,
            "photo-1560066984-138dadb4c035",
            true,
        ),
        service(
            "Rejuvenating Facial",
            "Deep cleanse and hydration.",
            "Skin",
            7500,
            60,
            "photo-1570172619644-dfd03ed5d881",
            true,
        ),
        service(
            "Gel Manicure",
            "Long-lasting polish and care.",
            "Nails",
            3500,
            40,
            "photo-1604654894610-df63bc536371",
            false,
        ),
    ]
}

fn demo_stylists() -> Vec<StylistInput> {
    vec![
        StylistInput {
            name: "Elena Ross".to_string(),
            role: "Senior Stylist".to_string(),
            bio: "Expert in modern cuts.".to_string(),
            image: unsplash("photo-1580618672591-eb180b1a973f"),
            specialties: vec!["Hair".to_string(), "Color".to_string()],
        },
        StylistInput {
            name: "Marco Diaz".to_string(),
            role: "Color Specialist".to_string(),
            bio: "Vibrant colors expert.".to_string(),
            image: unsplash("photo-1542596594-649edbc13630"),
            specialties: vec!["Color".to_string(), "Highlights".to_string()],
        },
    ]
}

fn demo_testimonials() -> Vec<NewTestimonial> {
    [
        (
            "Jessica M.",
            "Loyal Client",
            "The best salon experience I've ever had. Elena understood exactly what I wanted and delivered beyond expectations.",
            "https://randomuser.me/api/portraits/women/44.jpg",
        ),
        (
            "Michael T.",
            "New Client",
            "Incredible atmosphere and professional service. The hot towel shave was perfection.",
            "https://randomuser.me/api/portraits/men/32.jpg",
        ),
        (
            "Sophia L.",
            "VIP Member",
            "I've been coming here for years. The consistency and quality are unmatched in the city.",
            "https://randomuser.me/api/portraits/women/68.jpg",
        ),
    ]
    .into_iter()
    .map(|(name, role, content, avatar)| NewTestimonial {
        name: name.to_string(),
        role: role.to_string(),
        content: content.to_string(),
        rating: 5,
        avatar: avatar.to_string(),
    })
    .collect()
}

fn demo_offers() -> Vec<NewOffer> {
    vec![
        NewOffer {
            title: "New Client Special".to_string(),
            description: "Enjoy a complimentary treatment with your first haircut.".to_string(),
            code: "WELCOME20".to_string(),
            discount: "Complimentary Treatment".to_string(),
            expiry: "Ongoing".to_string(),
        },
        NewOffer {
            title: "Summer Glow Package".to_string(),
            description: "Full balayage, gloss, and style for a refreshed look.".to_string(),
            code: "SUMMERGLOW".to_string(),
            discount: "15% OFF".to_string(),
            expiry: "August 31, 2025".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_RATING, MIN_RATING};

    #[test]
    fn test_demo_catalog_is_well_formed() {
        assert!(demo_services().iter().any(|s| s.featured));
        assert!(demo_stylists().iter().all(|s| !s.specialties.is_empty()));
        assert!(demo_testimonials()
            .iter()
            .all(|t| (MIN_RATING..=MAX_RATING).contains(&t.rating)));
        assert_eq!(demo_offers().len(), 2);
    }
}
