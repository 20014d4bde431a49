use clientq_core::client::{Client, Document};
use clientq_core::storage::{ClientRepository, RepositoryError};

/// Demo clients used to seed an empty store.
pub fn demo_clients() -> Vec<Client> {
    // Helper to create a client with a national ID document
    let client = |document: &str, name: &str| {
        Client::new(&Document::parse(document).unwrap(), "CC", name)
    };

    vec![
        client("12345", "John Doe")
            .with_phone("1234567890")
            .with_email("john@example.com")
            .with_address("123 Main St")
            .with_credit_card("1234-5678-9012-3456"),
        client("67890", "Jane Smith")
            .with_phone("3001234567")
            .with_email("jane.smith@example.com")
            .with_address("45 Oak Avenue")
            .with_credit_card("4111-1111-1111-1111"),
        client("1020304050", "Carlos Ramirez")
            .with_phone("3109876543")
            .with_email("carlos.ramirez@example.com")
            .with_address("Calle 10 # 5-23"),
        client("900123456", "Acme Supplies")
            .with_phone("6015551234")
            .with_email("billing@acme.example.com")
            .with_address("Industrial Park, Lot 7"),
    ]
}

/// Inserts the demo clients, skipping any that already exist.
///
/// Returns how many clients were inserted.
pub async fn seed_demo_clients<R>(repository: &R) -> Result<usize, RepositoryError>
where
    R: ClientRepository + ?Sized,
{
    let mut inserted = 0;
    for client in demo_clients() {
        match repository.create_client(&client).await {
            Ok(()) => inserted += 1,
            Err(RepositoryError::AlreadyExists { .. }) => {
                tracing::trace!(document = %client.document, "Demo client already present");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(inserted)
}
