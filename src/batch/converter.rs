//! The `Converter` task turns incoming requests into conversions.
use std::collections::BTreeMap;

use tokio::sync::mpsc;

use crate::{
    amount::{Formatter, Parser},
    batch::{Conversion, Request, RowId},
    config::Settings,
};

/// Converts requests received over a channel, keeping results ordered by row.
pub struct Converter {
    formatter: Formatter,
    parser: Parser,
    /// Conversions keyed by row.
    conversions: BTreeMap<RowId, Conversion>,
    /// A channel receiver for incoming requests.
    receiver: mpsc::Receiver<Request>,
}

impl Converter {
    /// Creates a converter with no conversions yet.
    pub fn new(receiver: mpsc::Receiver<Request>, settings: &Settings) -> Self {
        Converter {
            formatter: Formatter::new(settings.format),
            parser: Parser::new(settings.parse),
            conversions: BTreeMap::new(),
            receiver,
        }
    }

    /// Retrieves all conversions, ordered by row.
    pub fn get_all_conversions(&self) -> &BTreeMap<RowId, Conversion> {
        &self.conversions
    }

    /// Converts a request and records the outcome, failed or not.
    fn process_request(&mut self, request: Request) {
        let row = request.get_row();
        let conversion =
            match Conversion::from_request(&request, &self.formatter, &self.parser) {
                Ok(conversion) => {
                    tracing::debug!(row, text = ?conversion.get_text(), "Converted row");
                    conversion
                }
                Err(err) => {
                    tracing::warn!(row, input = request.get_input(), "Error converting row: {err}");
                    Conversion::failed(&request, &err)
                }
            };
        if self.conversions.insert(row, conversion).is_some() {
            tracing::warn!(row, "Duplicate row, keeping the latest conversion");
        }
    }

    /// Runs the conversion loop until every sender is dropped.
    pub async fn run(&mut self) {
        while let Some(request) = self.receiver.recv().await {
            self.process_request(request);
        }
        tracing::info!(rows = self.conversions.len(), "Conversion finished");
    }
}

#[cfg(test)]
mod tests {
    use crate::amount::Amount;
    use crate::batch::{Request, RequestType};
    use crate::config::Settings;

    #[tokio::test]
    async fn test_converts_rows_in_order() {
        let (sender, receiver) = tokio::sync::mpsc::channel(100);
        let mut converter = super::Converter::new(receiver, &Settings::default());
        assert!(converter.get_all_conversions().is_empty());
        sender
            .send(Request::new(RequestType::Parse, 2, "壹佰元整"))
            .await
            .unwrap();
        sender
            .send(Request::new(RequestType::Format, 1, "100"))
            .await
            .unwrap();
        drop(sender); // Close the sender so the loop ends
        converter.run().await;
        let conversions = converter.get_all_conversions();
        assert_eq!(conversions.len(), 2);
        assert_eq!(conversions.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(conversions[&1].get_text(), Some("壹佰元整"));
        assert_eq!(conversions[&2].get_amount(), Amount::new(100, 0));
    }

    #[tokio::test]
    async fn test_failed_row_does_not_stop_the_batch() {
        let (sender, receiver) = tokio::sync::mpsc::channel(100);
        let mut converter = super::Converter::new(receiver, &Settings::default());
        sender
            .send(Request::new(RequestType::Format, 1, "abc"))
            .await
            .unwrap();
        sender
            .send(Request::new(RequestType::Format, 2, "0"))
            .await
            .unwrap();
        drop(sender);
        converter.run().await;
        let conversions = converter.get_all_conversions();
        assert!(conversions[&1].get_error().is_some());
        assert_eq!(conversions[&2].get_text(), Some("零元整"));
    }

    #[tokio::test]
    async fn test_duplicate_row_keeps_latest() {
        let (sender, receiver) = tokio::sync::mpsc::channel(100);
        let mut converter = super::Converter::new(receiver, &Settings::default());
        sender
            .send(Request::new(RequestType::Format, 1, "1"))
            .await
            .unwrap();
        sender
            .send(Request::new(RequestType::Format, 1, "2"))
            .await
            .unwrap();
        drop(sender);
        converter.run().await;
        let conversions = converter.get_all_conversions();
        assert_eq!(conversions.len(), 1);
        assert_eq!(conversions[&1].get_text(), Some("贰元整"));
    }
}
