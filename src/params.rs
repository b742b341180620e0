use thiserror::Error;

// Fixed in this revision; validation still runs so wiring these to the
// environment later cannot silently ship out-of-range values.
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TOP_P: f32 = 1.0;
const DEFAULT_MAX_TOKENS: u32 = 300;

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("temperature must be within [0.0, 2.0], got {0}")]
    Temperature(f32),
    #[error("top_p must be within [0.0, 1.0], got {0}")]
    TopP(f32),
    #[error("max_tokens must be a positive integer, got {0}")]
    MaxTokens(u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl GenerationParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ParamsError::Temperature(self.temperature));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(ParamsError::TopP(self.top_p));
        }
        if self.max_tokens == 0 {
            return Err(ParamsError::MaxTokens(self.max_tokens));
        }
        Ok(())
    }
}

pub fn load() -> Result<GenerationParams, ParamsError> {
    let params = GenerationParams::default();
    params.validate()?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::{GenerationParams, ParamsError, load};

    #[test]
    fn load_returns_validated_defaults() {
        let params = load().expect("defaults should validate");
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.top_p, 1.0);
        assert_eq!(params.max_tokens, 300);
    }

    #[test]
    fn validate_accepts_in_range_values() {
        let params = GenerationParams {
            temperature: 0.7,
            top_p: 1.0,
            max_tokens: 300,
        };
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_temperature_above_range() {
        let params = GenerationParams {
            temperature: 3.0,
            ..GenerationParams::default()
        };
        assert_eq!(params.validate(), Err(ParamsError::Temperature(3.0)));
    }

    #[test]
    fn validate_rejects_negative_temperature() {
        let params = GenerationParams {
            temperature: -0.1,
            ..GenerationParams::default()
        };
        assert_eq!(params.validate(), Err(ParamsError::Temperature(-0.1)));
    }

    #[test]
    fn validate_rejects_top_p_above_range() {
        let params = GenerationParams {
            top_p: 1.5,
            ..GenerationParams::default()
        };
        assert_eq!(params.validate(), Err(ParamsError::TopP(1.5)));
    }

    #[test]
    fn validate_rejects_zero_max_tokens() {
        let params = GenerationParams {
            max_tokens: 0,
            ..GenerationParams::default()
        };
        assert_eq!(params.validate(), Err(ParamsError::MaxTokens(0)));
    }

    #[test]
    fn error_messages_name_the_parameter_and_range() {
        let msg = ParamsError::Temperature(3.0).to_string();
        assert!(msg.contains("temperature"), "got: {msg}");
        assert!(msg.contains("[0.0, 2.0]"), "got: {msg}");

        let msg = ParamsError::TopP(1.5).to_string();
        assert!(msg.contains("top_p"), "got: {msg}");
        assert!(msg.contains("[0.0, 1.0]"), "got: {msg}");

        let msg = ParamsError::MaxTokens(0).to_string();
        assert!(msg.contains("max_tokens"), "got: {msg}");
    }
}
