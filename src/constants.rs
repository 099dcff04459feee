// Env values used by the PreferredPictures client.
pub const PREFERRED_PICTURES_IDENTITY: &str = "PREFERRED_PICTURES_IDENTITY";
pub const PREFERRED_PICTURES_SECRET_KEY: &str = "PREFERRED_PICTURES_SECRET_KEY";
pub const PREFERRED_PICTURES_ENDPOINT: &str = "PREFERRED_PICTURES_ENDPOINT";
pub const PREFERRED_PICTURES_MAX_CHOICES: &str = "PREFERRED_PICTURES_MAX_CHOICES";

// Defaults applied when the caller doesn't say otherwise.
pub const DEFAULT_ENDPOINT: &str = "https://api.preferred-pictures.com/";
pub const DEFAULT_MAX_CHOICES: usize = 35;
pub const DEFAULT_TTL: u64 = 600;
pub const DEFAULT_EXPIRATION_TTL: u64 = 3600;

// Query parameter names. The bracketed names carry repeated values.
pub const PARAM_CHOICES: &str = "choices[]";
pub const PARAM_CHOICES_PREFIX: &str = "choices_prefix";
pub const PARAM_CHOICES_SUFFIX: &str = "choices_suffix";
pub const PARAM_DESTINATIONS: &str = "destinations[]";
pub const PARAM_DESTINATIONS_PREFIX: &str = "destinations_prefix";
pub const PARAM_DESTINATIONS_SUFFIX: &str = "destinations_suffix";
pub const PARAM_EXPIRATION: &str = "expiration";
pub const PARAM_GO: &str = "go";
pub const PARAM_IDENTITY: &str = "identity";
pub const PARAM_JSON: &str = "json";
pub const PARAM_SIGNATURE: &str = "signature";
pub const PARAM_TOURNAMENT: &str = "tournament";
pub const PARAM_TTL: &str = "ttl";
pub const PARAM_UID: &str = "uid";
