use crate::types::records::Fields;

pub trait DocumentStore: Clone + Send + Sync + 'static {
    type Error: std::fmt::Display + Send + Sync + 'static;
    type GetFut<'a>: Future<Output = Result<Option<Fields>, Self::Error>> + Send + 'a
    where
        Self: 'a;
    type FindFut<'a>: Future<Output = Result<Option<Fields>, Self::Error>> + Send + 'a
    where
        Self: 'a;

    /// Point read by collection and document id.
    fn get_document<'a>(&'a self, collection: &'a str, doc_id: &'a str) -> Self::GetFut<'a>;

    /// Single-field equality query capped at one result. When several
    /// documents match, which one comes back is the store's choice.
    fn find_by_field<'a>(
        &'a self,
        collection: &'a str,
        field: &'a str,
        value: &'a str,
    ) -> Self::FindFut<'a>;
}
