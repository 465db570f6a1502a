use serde::{Deserialize, Serialize};

/// One submitted application. Answers are not modelled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub template_id: i64,
}
