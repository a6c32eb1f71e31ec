//! Starter data for an empty store.
//!
//! The default database is in-memory, so every fresh start would greet the
//! user with an empty catalog; these three office chairs give the reports and
//! similar-items views something to show. Seeding is skipped as soon as any
//! furniture exists.

use crate::{
    config::settings::Settings,
    core::{assessment, cleaning, furniture, repair},
    entities::Furniture,
    errors::Result,
};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::info;

/// Seeds three sample office chairs with line items and finalized
/// assessments, unless the store already holds furniture.
pub async fn seed_starter_data(db: &DatabaseConnection, settings: &Settings) -> Result<()> {
    if Furniture::find().count(db).await? > 0 {
        info!("Store already populated, skipping starter data.");
        return Ok(());
    }

    let hourly_rate = settings.labor.hourly_rate;
    let margin_threshold = settings.profitability.margin_threshold;

    // A free chair with a full repair/cleaning worksheet
    let think = furniture::create_furniture(
        db,
        furniture::NewFurniture {
            kind: "Chaise de Bureau".to_string(),
            brand: "Steelcase".to_string(),
            model: "Think v2".to_string(),
            condition: "Bon".to_string(),
            age: Some(5),
            acquisition_cost: Decimal::ZERO,
            description: Some(
                "Chaise de bureau noire avec accoudoirs réglables, dossier en mesh, \
                 roulettes fonctionnelles."
                    .to_string(),
            ),
            has_photo: false,
            has_damage: true,
            is_complete: true,
        },
    )
    .await?;

    repair::create_repair(
        db,
        repair::NewRepair {
            furniture_id: think.id,
            name: "Remplacement des roulettes".to_string(),
            is_needed: true,
            cost: Decimal::from(20),
            time_minutes: 15,
        },
    )
    .await?;
    repair::create_repair(
        db,
        repair::NewRepair {
            furniture_id: think.id,
            name: "Remplacement du vérin".to_string(),
            is_needed: false,
            cost: Decimal::from(35),
            time_minutes: 30,
        },
    )
    .await?;
    cleaning::create_cleaning_item(
        db,
        cleaning::NewCleaningItem {
            furniture_id: think.id,
            name: "Nettoyage standard".to_string(),
            is_needed: true,
            cost: Decimal::from(5),
            time_minutes: 20,
        },
    )
    .await?;
    cleaning::create_cleaning_item(
        db,
        cleaning::NewCleaningItem {
            furniture_id: think.id,
            name: "Traitement du tissu".to_string(),
            is_needed: true,
            cost: Decimal::from(15),
            time_minutes: 30,
        },
    )
    .await?;
    assessment::finalize_assessment(
        db,
        assessment::NewAssessment {
            furniture_id: think.id,
            market_value: Decimal::from(200),
            expected_sell_time: 14,
            sales_notes: Some(
                "Modèle recherché, bonne demande sur le marché local. Prévoir photos de \
                 qualité pour la mise en vente."
                    .to_string(),
            ),
            hourly_rate: None,
        },
        hourly_rate,
        margin_threshold,
    )
    .await?;

    // A premium chair bought cheap
    let aeron = furniture::create_furniture(
        db,
        furniture::NewFurniture {
            kind: "Chaise de Bureau".to_string(),
            brand: "Herman Miller".to_string(),
            model: "Aeron".to_string(),
            condition: "Excellent".to_string(),
            age: Some(3),
            acquisition_cost: Decimal::from(50),
            description: Some(
                "Chaise haut de gamme, légères marques d'usure, tous réglages fonctionnels."
                    .to_string(),
            ),
            has_photo: true,
            has_damage: false,
            is_complete: true,
        },
    )
    .await?;

    repair::create_repair(
        db,
        repair::NewRepair {
            furniture_id: aeron.id,
            name: "Remplacement d'un accoudoir".to_string(),
            is_needed: true,
            cost: Decimal::from(40),
            time_minutes: 30,
        },
    )
    .await?;
    cleaning::create_cleaning_item(
        db,
        cleaning::NewCleaningItem {
            furniture_id: aeron.id,
            name: "Nettoyage complet".to_string(),
            is_needed: true,
            cost: Decimal::from(30),
            time_minutes: 60,
        },
    )
    .await?;
    assessment::finalize_assessment(
        db,
        assessment::NewAssessment {
            furniture_id: aeron.id,
            market_value: Decimal::from(350),
            expected_sell_time: 7,
            sales_notes: Some("Modèle premium très recherché.".to_string()),
            hourly_rate: None,
        },
        hourly_rate,
        margin_threshold,
    )
    .await?;

    // A middling chair needing light work
    let zody = furniture::create_furniture(
        db,
        furniture::NewFurniture {
            kind: "Chaise de Bureau".to_string(),
            brand: "Haworth".to_string(),
            model: "Zody".to_string(),
            condition: "Moyen".to_string(),
            age: Some(6),
            acquisition_cost: Decimal::from(20),
            description: Some(
                "Chaise de bureau avec soutien lombaire, quelques taches.".to_string(),
            ),
            has_photo: true,
            has_damage: true,
            is_complete: true,
        },
    )
    .await?;

    repair::create_repair(
        db,
        repair::NewRepair {
            furniture_id: zody.id,
            name: "Réglage du soutien lombaire".to_string(),
            is_needed: true,
            cost: Decimal::from(20),
            time_minutes: 30,
        },
    )
    .await?;
    cleaning::create_cleaning_item(
        db,
        cleaning::NewCleaningItem {
            furniture_id: zody.id,
            name: "Détachage du tissu".to_string(),
            is_needed: true,
            cost: Decimal::from(15),
            time_minutes: 30,
        },
    )
    .await?;
    assessment::finalize_assessment(
        db,
        assessment::NewAssessment {
            furniture_id: zody.id,
            market_value: Decimal::from(150),
            expected_sell_time: 21,
            sales_notes: Some("Reconditionnement simple.".to_string()),
            hourly_rate: None,
        },
        hourly_rate,
        margin_threshold,
    )
    .await?;

    info!("Seeded starter data: 3 furniture records with assessments.");
    Ok(())
}
