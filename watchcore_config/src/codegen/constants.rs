use proc_macro2::TokenStream;
use quote::quote;

use crate::Configuration;

pub fn generate_constants(configuration: &Configuration) -> TokenStream {
    let default_application = configuration.default_application;
    let idle_timeout_minutes = configuration.idle_timeout_minutes;
    let channel = configuration.clicker.channel.as_str();
    let power = configuration.clicker.power;

    quote! {
        /// Registry index activated on power up.
        pub const DEFAULT_APPLICATION: usize = #default_application;
        /// Untouched minute boundaries tolerated before returning home.
        pub const IDLE_TIMEOUT_MINUTES: u8 = #idle_timeout_minutes;
        /// Channel code the clicker tunes to on activation.
        pub const CLICKER_CHANNEL: &str = #channel;
        /// PA table byte the clicker programs on activation.
        pub const CLICKER_POWER: u8 = #power;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ClickerConfiguration;

    #[test]
    fn constants_carry_configured_values() {
        // Given
        let configuration = Configuration {
            default_application: 2,
            idle_timeout_minutes: 5,
            clicker: ClickerConfiguration { channel: "BC".into(), power: 0xC0 },
        };

        // When
        let code = generate_constants(&configuration).to_string();

        // Then
        assert!(code.contains("DEFAULT_APPLICATION"));
        assert!(code.contains("2usize"));
        assert!(code.contains("5u8"));
        assert!(code.contains("\"BC\""));
        assert!(code.contains("192u8"));
    }
}
