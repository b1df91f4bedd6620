use crate::messages::MessageKey;
use crate::widget::{FieldWidget, TextField, WidgetContext};
use crate::{Record, WidgetOptions};
use tracing::debug;

/// Record attribute carrying the chain verification outcome
pub const TX_ID_FIELD: &str = "tx_id";

/// String code meaning "verification not established".
///
/// The upstream writer encodes the flag as the literal strings
/// `"True"`/`"False"`, or leaves the attribute unset. Only the exact
/// string `"False"` counts; a native boolean or any other value never
/// matches.
const VERIFICATION_FAILED: &str = "False";

/// Text field with a chain-verification check at construction time
///
/// Wraps the base [`TextField`]: value binding, formatting, and
/// rendering are delegated untouched. After the base initialization,
/// the record's [`TX_ID_FIELD`] is read once; if it holds the
/// [`VERIFICATION_FAILED`] code, one localized warning is raised
/// through the context. The warning is advisory and the instance still
/// behaves as a normal text field afterwards.
pub struct StockValidator {
    inner: TextField,
}

impl StockValidator {
    /// Creates the validator for `field` of `record`
    ///
    /// Base text-field initialization runs first; `field` and `options`
    /// are passed through to it unchanged. The verification check runs
    /// after and cannot fail.
    pub fn new(ctx: &WidgetContext, field: &str, record: &Record, options: WidgetOptions) -> Self {
        let inner = TextField::new(field, record, options);
        let validator = Self { inner };
        validator.check_verification(ctx, record);
        validator
    }

    /// One-shot advisory check of the record's verification flag
    fn check_verification(&self, ctx: &WidgetContext, record: &Record) {
        // Absent, null, and non-string values all read as None here,
        // so the comparison stays a string comparison.
        if record.text(TX_ID_FIELD) == Some(VERIFICATION_FAILED) {
            debug!(
                field = %self.inner.field_name(),
                "record carries a failed chain verification flag"
            );
            ctx.raise_warning(
                self.inner.field_name(),
                MessageKey::BlockchainVerificationError,
            );
        }
    }
}

impl FieldWidget for StockValidator {
    fn field_name(&self) -> &str {
        self.inner.field_name()
    }

    fn value(&self) -> &str {
        self.inner.value()
    }

    fn render(&self) -> String {
        self.inner.render()
    }
}
