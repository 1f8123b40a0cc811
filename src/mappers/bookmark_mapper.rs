use crate::mappers::collect;
use crate::types::bookmark::{Bookmark, BookmarkId, BookmarkTag, BookmarkTitle, BookmarkUrl};
use crate::types::dto::BookmarkDto;
use crate::types::errors::{BookmarkError, ValidationError};
use crate::types::timestamp;

/// Maps between `BookmarkDto` and `Bookmark`.
pub struct BookmarkMapper;

impl BookmarkMapper {
    /// Validates a stored record, reporting every invalid field at once.
    pub fn to_domain(dto: &BookmarkDto) -> Result<Bookmark, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let id = collect(BookmarkId::create(&dto.id), &mut errors);
        let title = collect(BookmarkTitle::create(&dto.title), &mut errors);
        let url = collect(BookmarkUrl::create(&dto.url), &mut errors);

        let mut tags: Vec<BookmarkTag> = Vec::with_capacity(dto.tags.len());
        for raw in &dto.tags {
            if let Some(tag) = collect(BookmarkTag::create(raw), &mut errors) {
                if tags.contains(&tag) {
                    errors.push(ValidationError::DuplicateTag(tag.value().to_string()));
                } else {
                    tags.push(tag);
                }
            }
        }

        let created_at = collect(timestamp::parse("createdAt", &dto.created_at), &mut errors);
        let updated_at = collect(timestamp::parse("updatedAt", &dto.updated_at), &mut errors);
        if let (Some(created), Some(updated)) = (created_at, updated_at) {
            if created > updated {
                errors.push(ValidationError::TimestampOrder {
                    created_at: dto.created_at.clone(),
                    updated_at: dto.updated_at.clone(),
                });
            }
        }

        match (id, title, url, created_at, updated_at) {
            (Some(id), Some(title), Some(url), Some(created), Some(updated)) if errors.is_empty() => {
                Bookmark::restore(id, title, url, tags, created, updated).map_err(|err| match err {
                    BookmarkError::DuplicateTag(tag) => vec![ValidationError::DuplicateTag(tag)],
                    other => vec![ValidationError::InvalidFormat {
                        field: "Bookmark",
                        value: other.to_string(),
                    }],
                })
            }
            _ => Err(errors),
        }
    }

    /// Projects a bookmark back to its stored shape.
    pub fn to_dto(bookmark: &Bookmark) -> BookmarkDto {
        BookmarkDto {
            id: bookmark.id().value().to_string(),
            title: bookmark.title().value().to_string(),
            url: bookmark.url().value().to_string(),
            tags: bookmark.tags().iter().map(|t| t.value().to_string()).collect(),
            created_at: timestamp::format(&bookmark.created_at()),
            updated_at: timestamp::format(&bookmark.updated_at()),
        }
    }
}
