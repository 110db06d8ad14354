use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by catalog entries
pub trait Identifiable {
    fn id(&self) -> i32;
}

impl<T: Identifiable + ?Sized> Identifiable for Box<T> {
    fn id(&self) -> i32 {
        (**self).id()
    }
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub log_level: String,
    pub seed_catalog: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: "warn".to_string(),
            seed_catalog: true,
        }
    }
}
