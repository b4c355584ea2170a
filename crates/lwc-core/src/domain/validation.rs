use tracing::{debug, instrument};

use crate::domain::{
    entities::{RawInput, ScaffoldRequest},
    error::ValidationFailure,
    value_objects::{FeatureOption, ProjectType, ResolvedType, is_cordova_token},
};

/// Turns [`RawInput`] into a [`ScaffoldRequest`].
///
/// Rules run in a fixed order and the first failure wins:
///
/// 1. options require silent mode
/// 2. type tokens are classified (Cordova or not, known or not)
/// 3. every type token must be known
/// 4. Cordova types may only be combined with other Cordova types
/// 5. every option token must be known
///
/// The validator holds no state. Calling it twice with the same input gives
/// the same result.
pub struct RequestValidator;

impl RequestValidator {
    #[instrument(level = "debug", skip_all)]
    pub fn validate(raw: &RawInput) -> Result<ScaffoldRequest, ValidationFailure> {
        let option_tokens = raw.option_tokens();
        let type_tokens = raw.type_tokens();

        if !raw.silent && !option_tokens.is_empty() {
            return Err(ValidationFailure::NoSilentWithOptions);
        }

        let classified = classify_types(&type_tokens);
        debug!(
            tokens = type_tokens.len(),
            cordova = classified.cordova_tokens,
            unknown = classified.unknown.len(),
            "App types classified"
        );

        if !classified.unknown.is_empty() {
            return Err(ValidationFailure::NonCompliantAppTypes {
                types: classified.unknown.join(","),
            });
        }

        if classified.cordova_tokens > 0 && classified.cordova_tokens != type_tokens.len() {
            return Err(ValidationFailure::MixedAppTypes {
                types: type_tokens.join(","),
            });
        }

        let options = parse_options(&option_tokens)?;

        // Past rule 3 every token is known, so `known` holds all of them.
        let resolved_type = if classified.cordova_tokens > 0 {
            ResolvedType::Cordova
        } else {
            ResolvedType::Single(classified.known.first().copied().unwrap_or_default())
        };
        let cordova_platforms = classified
            .known
            .into_iter()
            .filter(ProjectType::is_cordova)
            .collect();

        Ok(ScaffoldRequest::new(
            raw.name_or_default().to_string(),
            options,
            raw.silent,
            resolved_type,
            cordova_platforms,
        ))
    }
}

struct ClassifiedTypes<'a> {
    known: Vec<ProjectType>,
    unknown: Vec<&'a str>,
    cordova_tokens: usize,
}

fn classify_types<'a>(tokens: &[&'a str]) -> ClassifiedTypes<'a> {
    let mut classified = ClassifiedTypes {
        known: Vec::with_capacity(tokens.len()),
        unknown: Vec::new(),
        cordova_tokens: 0,
    };

    for &token in tokens {
        if is_cordova_token(token) {
            classified.cordova_tokens += 1;
        }
        match token.parse::<ProjectType>() {
            Ok(t) => classified.known.push(t),
            Err(_) => classified.unknown.push(token),
        }
    }

    classified
}

fn parse_options(tokens: &[&str]) -> Result<Vec<FeatureOption>, ValidationFailure> {
    let mut options = Vec::with_capacity(tokens.len());
    let mut rejected = Vec::new();

    for &token in tokens {
        match token.parse::<FeatureOption>() {
            Ok(o) => options.push(o),
            Err(_) => rejected.push(token),
        }
    }

    if rejected.is_empty() {
        Ok(options)
    } else {
        Err(ValidationFailure::NonCompliantOptions {
            options: rejected.join(","),
        })
    }
}
