// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Default catalog inserted on first start when `SEED_DEFAULT_CONTENT` is set.

use super::{DocumentStorage, ServiceRepository, StorageResult};
use crate::models::CreateServiceRequest;

const DEFAULT_SERVICES: [(&str, &str, &str); 4] = [
    (
        "Débarras d'encombrants",
        "Nous enlevons rapidement tous vos objets encombrants : meubles, électroménagers, matelas, cartons. Service complet avec tri et évacuation professionnelle.",
        "https://images.pexels.com/photos/4246196/pexels-photo-4246196.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Vide maison complet",
        "Succession, déménagement ou rénovation ? Nous vidons entièrement votre maison ou appartement avec soin et efficacité.",
        "https://images.pexels.com/photos/4246120/pexels-photo-4246120.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Vide cave et grenier",
        "Libérez vos caves, greniers et garages encombrés. Notre équipe accède aux espaces difficiles et évacue tous vos encombrants en toute sécurité.",
        "https://images.pexels.com/photos/5025636/pexels-photo-5025636.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        "Débarras de bureau",
        "Fermeture, déménagement ou réorganisation de bureaux ? Nous nous occupons du débarras professionnel de vos locaux commerciaux et administratifs.",
        "https://images.pexels.com/photos/3760072/pexels-photo-3760072.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
];

/// Insert the default services if the collection is empty.
///
/// Returns the number of inserted records. A non-empty collection is left
/// exactly as it is.
pub fn seed_default_content(storage: &DocumentStorage) -> StorageResult<usize> {
    let services = ServiceRepository::new(storage);
    if services.count()? > 0 {
        return Ok(0);
    }

    for (position, (title, description, image)) in DEFAULT_SERVICES.iter().enumerate() {
        services.create(CreateServiceRequest {
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            order: position as i64 + 1,
        })?;
    }

    tracing::info!(count = DEFAULT_SERVICES.len(), "Seeded default services");
    Ok(DEFAULT_SERVICES.len())
}
