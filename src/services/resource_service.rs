//! Resource Service - The create/read/update/delete contract shared by every
//! catalog record type. Entity-specific rules live in the sibling services.

use crate::codec::{DecodedInput, MediaType, Representation};
use crate::domain::{DomainError, ResourceRepository};

fn not_found<R: Representation>(id: i32) -> DomainError {
    DomainError::NotFound(format!("{} {} does not exist", R::ELEMENT, id))
}

/// List every record of a type
pub async fn list<R, Repo>(repo: &Repo) -> Result<Vec<R>, DomainError>
where
    R: Representation,
    Repo: ResourceRepository<R> + ?Sized,
{
    repo.find_all().await
}

/// Get a single record by ID
pub async fn get<R, Repo>(repo: &Repo, id: i32) -> Result<R, DomainError>
where
    R: Representation,
    Repo: ResourceRepository<R> + ?Sized,
{
    repo.find_by_id(id).await?.ok_or_else(|| not_found::<R>(id))
}

/// Decode a body in the negotiated format and insert the resulting record
pub async fn create<R, Repo>(
    repo: &Repo,
    media: Option<MediaType>,
    body: &[u8],
) -> Result<R, DomainError>
where
    R: Representation,
    Repo: ResourceRepository<R> + ?Sized,
{
    let media = media.ok_or(DomainError::UnsupportedMediaType)?;
    let input = DecodedInput::decode(media, R::ELEMENT, body)?;
    let record = R::from_input(&input).ok_or_else(DomainError::missing_data)?;

    let label = record.label();
    match repo.create(record).await {
        Ok(created) => {
            tracing::info!("Created {} at {}", label, created.url());
            Ok(created)
        }
        Err(DomainError::Conflict(detail)) => {
            tracing::debug!("Rejected {}: {}", label, detail);
            Err(DomainError::Conflict(format!("{} already exists", label)))
        }
        Err(e) => Err(e),
    }
}

/// Merge a partial payload into an existing record and persist it.
///
/// The id is resolved before the content type is checked. Fields that are
/// absent or malformed in the payload keep their stored value.
pub async fn update<R, Repo>(
    repo: &Repo,
    id: i32,
    media: Option<MediaType>,
    body: &[u8],
) -> Result<R, DomainError>
where
    R: Representation,
    Repo: ResourceRepository<R> + ?Sized,
{
    let mut record = get::<R, Repo>(repo, id).await?;
    let media = media.ok_or(DomainError::UnsupportedMediaType)?;

    let input = DecodedInput::decode_lenient(media, R::ELEMENT, body);
    record.merge(&input);

    match repo.update(record).await {
        Ok(updated) => Ok(updated),
        Err(DomainError::Conflict(detail)) => {
            tracing::debug!("Rejected update of {} {}: {}", R::ELEMENT, id, detail);
            Err(DomainError::Conflict(format!(
                "{} {} conflicts with an existing record",
                R::ELEMENT,
                id
            )))
        }
        Err(DomainError::NotFound(_)) => Err(not_found::<R>(id)),
        Err(e) => Err(e),
    }
}

/// Delete a record that nothing else depends on
pub async fn delete<R, Repo>(repo: &Repo, id: i32) -> Result<(), DomainError>
where
    R: Representation,
    Repo: ResourceRepository<R> + ?Sized,
{
    get::<R, Repo>(repo, id).await?;
    repo.delete(id).await?;
    tracing::info!("Deleted {} {}", R::ELEMENT, id);
    Ok(())
}
