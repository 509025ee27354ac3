use lpwatch_core::Pipeline;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Pipeline,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }
}
