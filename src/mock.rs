//! Mock collaborators for isolating the client in tests.

use mockall::mock;

use crate::notify::{Connectivity, Navigator, Notice, Notifier};
use crate::session::{TokenStore, TokenStoreError};

mock! {
    pub TokenStore {}

    impl TokenStore for TokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError>;
        fn set(&self, key: &str, value: &str) -> Result<(), TokenStoreError>;
        fn remove(&self, key: &str) -> Result<(), TokenStoreError>;
    }
}

mock! {
    pub Notifier {}

    impl Notifier for Notifier {
        fn notify(&self, notice: &Notice);
    }
}

mock! {
    pub Navigator {}

    impl Navigator for Navigator {
        fn redirect_to_login(&self);
    }
}

mock! {
    pub Connectivity {}

    impl Connectivity for Connectivity {
        fn is_online(&self) -> bool;
    }
}
