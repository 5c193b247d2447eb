//! The end-to-end holiday feature pipeline.
//!
//! Fetches provider events once, builds the secular and religious tables
//! independently and merges them.  The pipeline is a pure function of the
//! provider's events and the configuration.

use hcal_core::errors::Result;
use hcal_time::Turkey;
use log::info;

use crate::classifier::{EventClassifier, SubstringClassifier};
use crate::config::FeatureConfig;
use crate::merger::merge;
use crate::provider::{HolidayProvider, TurkeyPublicHolidays};
use crate::religious::ReligiousFeatureBuilder;
use crate::secular::build_secular_features;
use crate::table::DailyTable;

/// Builds the merged Turkey holiday feature table.
#[derive(Debug)]
pub struct HolidayFeaturePipeline<'a> {
    provider: &'a dyn HolidayProvider,
    classifier: Box<dyn EventClassifier + 'a>,
    config: FeatureConfig,
}

impl<'a> HolidayFeaturePipeline<'a> {
    /// A pipeline over `provider` with the default configuration and
    /// classifier.
    pub fn new(provider: &'a dyn HolidayProvider) -> Self {
        Self {
            provider,
            classifier: Box::new(SubstringClassifier::default()),
            config: FeatureConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: FeatureConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the event classifier.
    pub fn with_classifier(mut self, classifier: impl EventClassifier + 'a) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Run the pipeline.
    ///
    /// # Errors
    /// Any error from configuration validation, the provider, either
    /// builder or the merger aborts the run; no partial table is returned.
    pub fn run(&self) -> Result<DailyTable> {
        self.config.validate()?;
        let range = self.config.date_range()?;
        info!(
            "building holiday features for {range} from '{}'",
            self.provider.name()
        );

        let events = self
            .provider
            .events(self.config.start_year..=self.config.end_year)?;
        info!("{} events received", events.len());

        let secular = build_secular_features(range, Turkey.fixed_holidays())?;
        let religious = ReligiousFeatureBuilder::new(self.classifier.as_ref(), &self.config)
            .build(self.provider.name(), &events)?;

        merge(&secular, &religious, &self.config.date_column)
    }
}

/// The 2022–2031 Turkey table from the bundled holiday data.
pub fn turkey_holiday_table() -> Result<DailyTable> {
    HolidayFeaturePipeline::new(&TurkeyPublicHolidays).run()
}
