use crate::triggers::TriggerRouter;

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState<D, P> {
    pub triggers: Arc<TriggerRouter<D, P>>,
}
