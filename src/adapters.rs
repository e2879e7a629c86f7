pub mod fcm;
pub mod firestore;

pub use fcm::FcmHttpSender;
pub use firestore::FirestoreRestStore;
