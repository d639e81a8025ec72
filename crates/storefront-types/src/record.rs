use crate::document::Document;
use crate::id::DocumentId;

fn merge_field(target: &mut Option<String>, incoming: Option<String>) {
    if incoming.is_some() {
        *target = incoming;
    }
}

/// A product category. `name` doubles as a secondary lookup key, though
/// nothing enforces its uniqueness.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Category {
    pub id: Option<DocumentId>,
    pub name: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

impl Document for Category {
    const COLLECTION: &'static str = "categories";
    const KIND: &'static str = "Category";

    fn id(&self) -> Option<&DocumentId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: Option<DocumentId>) {
        self.id = id;
    }

    fn merge_patch(&mut self, patch: Self) {
        merge_field(&mut self.name, patch.name);
    }
}

/// A customer of the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Customer {
    pub id: Option<DocumentId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Customer {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }
}

impl Document for Customer {
    const COLLECTION: &'static str = "customers";
    const KIND: &'static str = "Customer";

    fn id(&self) -> Option<&DocumentId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: Option<DocumentId>) {
        self.id = id;
    }

    fn merge_patch(&mut self, patch: Self) {
        merge_field(&mut self.first_name, patch.first_name);
        merge_field(&mut self.last_name, patch.last_name);
    }
}

/// A supplier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vendor {
    pub id: Option<DocumentId>,
    pub name: Option<String>,
}

impl Vendor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

impl Document for Vendor {
    const COLLECTION: &'static str = "vendors";
    const KIND: &'static str = "Vendor";

    fn id(&self) -> Option<&DocumentId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: Option<DocumentId>) {
        self.id = id;
    }

    fn merge_patch(&mut self, patch: Self) {
        merge_field(&mut self.name, patch.name);
    }
}
