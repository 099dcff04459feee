use std::fmt::{Debug, Formatter};

use log::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::constants::*;
use crate::error::Error;
use crate::error::Result;
use crate::hash::hex_hmac_sha256;
use crate::request::ChooseRequest;
use crate::time::{now, DateTime};

/// The fixed field order of the canonical signing string.
///
/// This order is part of the wire contract with the choose service: the
/// verifier rebuilds the same string from the query parameters, so it must
/// never be derived from insertion order or alphabetization.
const SIGNING_FIELD_ORDER: [&str; 12] = [
    PARAM_CHOICES_PREFIX,
    PARAM_CHOICES_SUFFIX,
    PARAM_CHOICES,
    PARAM_DESTINATIONS_PREFIX,
    PARAM_DESTINATIONS_SUFFIX,
    PARAM_DESTINATIONS,
    PARAM_EXPIRATION,
    PARAM_GO,
    PARAM_JSON,
    PARAM_TOURNAMENT,
    PARAM_TTL,
    PARAM_UID,
];

/// A request parameter value, decided once at assembly time so the
/// canonical-string renderer never inspects types.
enum ParamValue {
    Scalar(String),
    Sequence(Vec<String>),
}

impl ParamValue {
    /// Render the value for the canonical signing string.
    ///
    /// Sequences join their elements with `,`. Neither `,` nor the `/` used
    /// between fields is escaped; values containing them make the canonical
    /// string ambiguous. That is a known constraint of the wire format and
    /// must be preserved for the verifier to recompute the same signature.
    fn render(&self) -> String {
        match self {
            ParamValue::Scalar(v) => v.clone(),
            ParamValue::Sequence(vs) => vs.join(","),
        }
    }
}

/// Signer that builds signed choose URLs for the PreferredPictures API.
///
/// The signer performs no I/O. It holds only immutable owned data, so one
/// instance can be shared across threads and signs through `&self`.
#[derive(Clone)]
pub struct Signer {
    identity: String,
    secret_key: String,
    max_choices: usize,
    endpoint: String,

    time: Option<DateTime>,
}

impl Debug for Signer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("identity", &self.identity)
            .field("secret_key", &redact(&self.secret_key))
            .field("max_choices", &self.max_choices)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Mask a secret in debug output, keeping enough to tell secrets apart.
fn redact(secret: &str) -> String {
    if secret.len() < 12 {
        "***".to_string()
    } else {
        format!("{}***{}", &secret[..3], &secret[secret.len() - 3..])
    }
}

impl Signer {
    /// Create a new signer from the given config.
    ///
    /// Fails with [`ErrorKind::ConfigInvalid`][crate::ErrorKind::ConfigInvalid]
    /// if the config is missing an identity or a secret key.
    pub fn new(config: Config) -> Result<Self> {
        let identity = match config.identity {
            Some(v) if !v.is_empty() => v,
            _ => return Err(Error::config_invalid("identity is required")),
        };
        let secret_key = match config.secret_key {
            Some(v) if !v.is_empty() => v,
            _ => return Err(Error::config_invalid("secret key is required")),
        };

        Ok(Self {
            identity,
            secret_key,
            max_choices: config.max_choices,
            endpoint: config.endpoint,
            time: None,
        })
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    fn get_time(&self) -> DateTime {
        self.time.unwrap_or_else(now)
    }

    /// Build a signed URL that asks the service to choose among the
    /// request's choices.
    ///
    /// Validates the request, assembles the parameter map, signs the
    /// canonical serialization with HMAC-SHA256 keyed by the secret key,
    /// and returns `{endpoint}choose?{query}` with every parameter
    /// form-urlencoded. Repeated parameters (`choices[]`,
    /// `destinations[]`) carry one element per key occurrence.
    pub fn build_choose_url(&self, req: &ChooseRequest) -> Result<String> {
        if req.choices.len() > self.max_choices {
            return Err(Error::too_many_choices(format!(
                "{} choices supplied, max is {}",
                req.choices.len(),
                self.max_choices
            )));
        }
        if req.choices.is_empty() {
            return Err(Error::no_choices_supplied("choices must not be empty"));
        }

        let params = self.build_params(req, self.get_time());

        let signing_string = signing_string(&params);
        debug!("string to sign: {}", signing_string);

        let signature = hex_hmac_sha256(self.secret_key.as_bytes(), signing_string.as_bytes());

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &params {
            match value {
                ParamValue::Scalar(v) => {
                    serializer.append_pair(name, v);
                }
                ParamValue::Sequence(vs) => {
                    for v in vs {
                        serializer.append_pair(name, v);
                    }
                }
            }
        }
        serializer.append_pair(PARAM_SIGNATURE, &signature);
        serializer.append_pair(PARAM_IDENTITY, &self.identity);

        let url = format!("{}choose?{}", self.endpoint, serializer.finish());
        debug!("built choose url: {}", url);

        Ok(url)
    }

    /// Assemble the parameter map for a request.
    ///
    /// Insertion order here is the order parameters appear in the query
    /// string; the signing string uses [`SIGNING_FIELD_ORDER`] instead.
    /// Optional fields are only present when set, and the `go`/`json`
    /// flags only when true, as the literal `true`.
    fn build_params(&self, req: &ChooseRequest, signing_time: DateTime) -> Vec<(&'static str, ParamValue)> {
        let expiration = signing_time.timestamp() + req.expiration_ttl as i64;
        let uid = req
            .uid
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut params = vec![
            (PARAM_CHOICES, ParamValue::Sequence(req.choices.clone())),
            (PARAM_EXPIRATION, ParamValue::Scalar(expiration.to_string())),
            (PARAM_TOURNAMENT, ParamValue::Scalar(req.tournament.clone())),
            (PARAM_TTL, ParamValue::Scalar(req.ttl.to_string())),
            (PARAM_UID, ParamValue::Scalar(uid)),
        ];

        if let Some(v) = &req.choices_prefix {
            params.push((PARAM_CHOICES_PREFIX, ParamValue::Scalar(v.clone())));
        }
        if let Some(v) = &req.choices_suffix {
            params.push((PARAM_CHOICES_SUFFIX, ParamValue::Scalar(v.clone())));
        }
        if let Some(v) = &req.destinations_prefix {
            params.push((PARAM_DESTINATIONS_PREFIX, ParamValue::Scalar(v.clone())));
        }
        if let Some(v) = &req.destinations_suffix {
            params.push((PARAM_DESTINATIONS_SUFFIX, ParamValue::Scalar(v.clone())));
        }
        if !req.destinations.is_empty() {
            params.push((
                PARAM_DESTINATIONS,
                ParamValue::Sequence(req.destinations.clone()),
            ));
        }
        if req.go {
            params.push((PARAM_GO, ParamValue::Scalar("true".to_string())));
        }
        if req.json {
            params.push((PARAM_JSON, ParamValue::Scalar("true".to_string())));
        }

        params
    }
}

/// Build the canonical signing string from an assembled parameter map.
///
/// Fields absent from the map are skipped; present fields are rendered in
/// the fixed order and joined with `/`.
fn signing_string(params: &[(&'static str, ParamValue)]) -> String {
    SIGNING_FIELD_ORDER
        .iter()
        .filter_map(|field| {
            params
                .iter()
                .find(|(name, _)| name == field)
                .map(|(_, value)| value.render())
        })
        .collect::<Vec<_>>()
        .join("/")
}
