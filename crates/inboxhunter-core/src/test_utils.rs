//! Test helpers for asserting on emitted log levels

use std::sync::{Arc, Mutex};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Layer that records the level of every event it sees
#[derive(Clone, Default)]
struct LevelRecorder {
    levels: Arc<Mutex<Vec<Level>>>,
}

impl<S: Subscriber> Layer<S> for LevelRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.levels.lock().unwrap().push(*event.metadata().level());
    }
}

/// Run `f` with a recording subscriber on this thread and return its result
/// together with the levels of all events it emitted.
pub fn levels_logged<R>(f: impl FnOnce() -> R) -> (R, Vec<Level>) {
    let recorder = LevelRecorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    let levels = recorder.levels.lock().unwrap().clone();
    (result, levels)
}
