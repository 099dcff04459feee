use crate::constants::{DEFAULT_EXPIRATION_TTL, DEFAULT_TTL};

/// Options for a single choose request.
///
/// A request is built per call and consumed by
/// [`Signer::build_choose_url`][crate::Signer::build_choose_url]; it is
/// never persisted. Optional fields left unset are omitted from both the
/// signed payload and the emitted query string.
#[derive(Clone, Debug)]
pub struct ChooseRequest {
    /// The choices the service should pick from, in caller order.
    ///
    /// Must hold between 1 and the configured `max_choices` entries.
    pub choices: Vec<String>,
    /// The tournament this request participates in.
    pub tournament: String,
    /// Time to live, in seconds, for an action to be taken from the choice.
    pub ttl: u64,
    /// Time to live, in seconds, for the URL's signature. After this time
    /// the request will no longer be valid.
    pub expiration_ttl: u64,
    /// An optional unique identifier used to correlate choices and actions.
    ///
    /// When `None`, a fresh v4 UUID is generated at signing time.
    pub uid: Option<String>,
    /// An optional prefix to prepend to all of the choices.
    pub choices_prefix: Option<String>,
    /// An optional suffix to append to all of the choices.
    pub choices_suffix: Option<String>,
    /// Destination URLs paired with each of the choices by position.
    ///
    /// An empty list means no destinations are sent.
    pub destinations: Vec<String>,
    /// An optional prefix to prepend to all of the destination URLs.
    pub destinations_prefix: Option<String>,
    /// An optional suffix to append to all of the destination URLs.
    pub destinations_suffix: Option<String>,
    /// Ask for a redirect to a destination URL from a previously made
    /// choice instead of a new choice.
    pub go: bool,
    /// Return the choice using JSON rather than a HTTP 302 redirect.
    pub json: bool,
}

impl ChooseRequest {
    /// Create a request for the given choices and tournament, with default
    /// ttl (600s) and expiration ttl (3600s) and all optional fields unset.
    pub fn new(choices: Vec<String>, tournament: &str) -> Self {
        Self {
            choices,
            tournament: tournament.to_string(),
            ttl: DEFAULT_TTL,
            expiration_ttl: DEFAULT_EXPIRATION_TTL,
            uid: None,
            choices_prefix: None,
            choices_suffix: None,
            destinations: Vec::new(),
            destinations_prefix: None,
            destinations_suffix: None,
            go: false,
            json: false,
        }
    }

    /// Specify the time to live for acting on the choice.
    pub fn with_ttl(mut self, ttl: u64) -> Self {
        self.ttl = ttl;
        self
    }

    /// Specify the time to live for the URL's signature.
    pub fn with_expiration_ttl(mut self, expiration_ttl: u64) -> Self {
        self.expiration_ttl = expiration_ttl;
        self
    }

    /// Specify the correlation identifier instead of generating one.
    pub fn with_uid(mut self, uid: &str) -> Self {
        self.uid = Some(uid.to_string());
        self
    }

    /// Specify the prefix prepended to all of the choices.
    pub fn with_choices_prefix(mut self, prefix: &str) -> Self {
        self.choices_prefix = Some(prefix.to_string());
        self
    }

    /// Specify the suffix appended to all of the choices.
    pub fn with_choices_suffix(mut self, suffix: &str) -> Self {
        self.choices_suffix = Some(suffix.to_string());
        self
    }

    /// Specify the destination URLs paired with the choices.
    pub fn with_destinations(mut self, destinations: Vec<String>) -> Self {
        self.destinations = destinations;
        self
    }

    /// Specify the prefix prepended to all of the destination URLs.
    pub fn with_destinations_prefix(mut self, prefix: &str) -> Self {
        self.destinations_prefix = Some(prefix.to_string());
        self
    }

    /// Specify the suffix appended to all of the destination URLs.
    pub fn with_destinations_suffix(mut self, suffix: &str) -> Self {
        self.destinations_suffix = Some(suffix.to_string());
        self
    }

    /// Ask the service to redirect to a previously chosen destination.
    pub fn with_go(mut self, go: bool) -> Self {
        self.go = go;
        self
    }

    /// Ask the service to answer with JSON instead of a redirect.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}
