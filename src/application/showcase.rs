use crate::{FactoryError, ShowcaseConfig, application::client_code, factories::Factories};
use std::io::Write;

/// Runs the client code once per configured variant.
///
/// Banners announcing each run are logged rather than written, so the
/// output sink only ever receives product results.
pub struct Showcase {
    config: ShowcaseConfig,
    factories: Factories,
}

impl Showcase {
    pub fn new(config: ShowcaseConfig) -> Result<Self, FactoryError> {
        config.validate()?;
        Ok(Self {
            config,
            factories: Factories::new(),
        })
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    pub fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), FactoryError> {
        for (position, variant) in self.config.variants.iter().enumerate() {
            if position == 0 {
                tracing::info!(
                    "Client: Testing client code with the {} factory type:",
                    variant.ordinal()
                );
            } else {
                if self.config.separator {
                    writeln!(out)?;
                }
                tracing::info!(
                    "Client: Testing the same client code with the {} factory type:",
                    variant.ordinal()
                );
            }

            client_code(self.factories.get(*variant), &mut *out)?;
        }

        out.flush()?;
        Ok(())
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            config: ShowcaseConfig::default(),
            factories: Factories::new(),
        }
    }
}
