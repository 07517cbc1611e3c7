//! Listing description generation.
//!
//! Builds a French prompt from property facts and makes a single completion
//! call. No caching and no retry; a provider failure is returned as-is.

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use rig::{client::CompletionClient, completion::Prompt, providers::anthropic};
use serde::Deserialize;

use crate::error::AiError;

pub const DEFAULT_MODEL: &str = "claude-3-5-haiku-latest";

/// Property facts from the generate-description request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionRequest {
    pub property_type: String,
    pub price_type: String,
    pub price: i64,
    pub location: String,
    pub beds: Option<i32>,
    pub baths: Option<i32>,
    pub area: Option<i32>,
    #[serde(default)]
    pub features: Vec<String>,
    pub tone: Option<String>,
}

/// Builds the French prompt sent to the model.
pub fn build_prompt(request: &DescriptionRequest) -> String {
    let mut facts = vec![
        format!("Type de bien : {}", request.property_type),
        format!("Localisation : {}", request.location),
        format!("Prix : {} EUR{}", request.price, price_suffix(&request.price_type)),
    ];
    if let Some(beds) = request.beds {
        facts.push(format!("Chambres : {beds}"));
    }
    if let Some(baths) = request.baths {
        facts.push(format!("Salles de bain : {baths}"));
    }
    if let Some(area) = request.area {
        facts.push(format!("Surface : {area} m2"));
    }
    if !request.features.is_empty() {
        facts.push(format!("Equipements : {}", request.features.join(", ")));
    }

    let tone = request.tone.as_deref().unwrap_or("professionnel");

    format!(
        "Redige une annonce immobiliere en francais pour le bien suivant.\n\
Ton : {tone}.\n\
Reponds uniquement avec le texte de l'annonce, sans titre ni mise en forme.\n\n\
{}",
        facts.join("\n")
    )
}

fn price_suffix(price_type: &str) -> &'static str {
    match price_type {
        "rent" => " par mois",
        "vacation" => " par nuit",
        _ => "",
    }
}

/// Trait for generating listing descriptions.
#[async_trait]
pub trait DescriptionServiceTrait: Send + Sync {
    async fn generate(&self, request: DescriptionRequest) -> Result<String, AiError>;
}

/// Generator backed by the Anthropic provider.
pub struct DescriptionGenerator {
    api_key: Option<String>,
    model: String,
}

impl DescriptionGenerator {
    pub fn new(api_key: Option<String>, model: Option<String>) -> Self {
        DescriptionGenerator {
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl DescriptionServiceTrait for DescriptionGenerator {
    async fn generate(&self, request: DescriptionRequest) -> Result<String, AiError> {
        if request.property_type.trim().is_empty() || request.location.trim().is_empty() {
            return Err(AiError::invalid_input(
                "propertyType and location are required",
            ));
        }
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AiError::MissingApiKey("anthropic".to_string()))?;

        let prompt = build_prompt(&request);
        debug!("generating description with model {}", self.model);

        let client: anthropic::Client<HttpClient> =
            anthropic::Client::new(key).map_err(|e| AiError::Provider(e.to_string()))?;
        let response = client
            .agent(&self.model)
            .build()
            .prompt(&prompt)
            .await
            .map_err(|e| AiError::Provider(e.to_string()))?;

        Ok(response.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> DescriptionRequest {
        DescriptionRequest {
            property_type: "appartement".to_string(),
            price_type: "rent".to_string(),
            price: 1_200,
            location: "Lyon 6e".to_string(),
            beds: Some(3),
            baths: None,
            area: Some(85),
            features: vec!["balcon".to_string(), "cave".to_string()],
            tone: Some("chaleureux".to_string()),
        }
    }

    #[test]
    fn prompt_contains_all_provided_facts() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Type de bien : appartement"));
        assert!(prompt.contains("Localisation : Lyon 6e"));
        assert!(prompt.contains("Prix : 1200 EUR par mois"));
        assert!(prompt.contains("Chambres : 3"));
        assert!(prompt.contains("Surface : 85 m2"));
        assert!(prompt.contains("Equipements : balcon, cave"));
        assert!(prompt.contains("Ton : chaleureux"));
        assert!(!prompt.contains("Salles de bain"));
    }

    #[test]
    fn sale_price_has_no_suffix_and_tone_defaults() {
        let mut r = request();
        r.price_type = "sale".to_string();
        r.tone = None;
        let prompt = build_prompt(&r);
        assert!(prompt.contains("Prix : 1200 EUR\n"));
        assert!(prompt.contains("Ton : professionnel"));
    }

    #[tokio::test]
    async fn missing_api_key_is_reported() {
        let generator = DescriptionGenerator::new(None, None);
        let err = generator.generate(request()).await.unwrap_err();
        assert!(matches!(err, AiError::MissingApiKey(_)));
    }

    #[tokio::test]
    async fn blank_location_is_rejected_before_any_call() {
        let generator = DescriptionGenerator::new(Some("key".to_string()), None);
        let mut r = request();
        r.location = "  ".to_string();
        let err = generator.generate(r).await.unwrap_err();
        assert!(matches!(err, AiError::InvalidInput(_)));
    }
}
