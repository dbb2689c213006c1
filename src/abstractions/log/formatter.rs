use tracing::field::{Field, Visit};
use tracing_subscriber::{
  field::RecordFields,
  fmt::{
    format::Writer,
    FormatFields
  }
};

/// Writes the notice message first and any extra fields after it, omitting the `threshold` bookkeeping field.
pub(crate) struct NoticeFieldFormatter;

impl<'writer> FormatFields<'writer> for NoticeFieldFormatter {
  fn format_fields<R: RecordFields>(
    &self,
    writer: Writer<'writer>,
    fields: R,
  ) -> std::fmt::Result {
    let mut visitor = NoticeVisitor { writer, result: Ok(()) };
    fields.record(&mut visitor);
    visitor.result
  }
}

struct NoticeVisitor<'writer> {
  writer: Writer<'writer>,
  result: std::fmt::Result,
}

impl<'writer> Visit for NoticeVisitor<'writer> {
  fn record_str(&mut self, field: &Field, value: &str) {
    if self.result.is_err() {
      return;
    }
    self.result = match field.name() {
      "message" => write!(self.writer, "{}", value),
      name      => write!(self.writer, " {}={}", name, value),
    };
  }

  fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
    if self.result.is_err() {
      return;
    }
    self.result = match field.name() {
      "threshold" => Ok(()),
      "message"   => write!(self.writer, "{:?}", value),
      name        => write!(self.writer, " {}={:?}", name, value),
    };
  }
}
