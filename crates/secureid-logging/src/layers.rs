//! Custom tracing layers for SecureID

use tracing::{span, Subscriber};
use tracing_subscriber::{
    fmt::MakeWriter,
    layer::{Context, Layer},
    registry::LookupSpan,
};

use crate::context::{SessionContextData, SessionContextGuard};

/// Layer that tags every new span with its session
///
/// The session comes from the creating thread's [`SessionContextGuard`],
/// or failing that from the parent span. Spans created inside a task that
/// was instrumented with a session span therefore carry the session on
/// any thread the task runs on.
#[derive(Debug, Default)]
pub struct SessionContextLayer;

impl SessionContextLayer {
    pub fn new() -> Self {
        Self
    }
}

/// Extension data stored on spans
#[derive(Debug, Clone)]
pub struct SessionContextExtension {
    pub data: SessionContextData,
}

impl<S> Layer<S> for SessionContextLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_new_span(&self, _attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let inherited = || {
            span.parent().and_then(|parent| {
                let extensions = parent.extensions();
                extensions
                    .get::<SessionContextExtension>()
                    .map(|ext| ext.data.clone())
            })
        };
        if let Some(session) = SessionContextGuard::current().or_else(inherited) {
            span.extensions_mut()
                .insert(SessionContextExtension { data: session });
        }
    }
}

/// JSONL formatting layer writing to `writer`
pub fn jsonl_layer<S, W>(writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .flatten_event(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(writer)
}
