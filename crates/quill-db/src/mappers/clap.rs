//! Clap entity <-> model mapper

use quill_core::entities::Clap;
use quill_core::value_objects::Snowflake;

use crate::models::ClapModel;

/// Convert ClapModel to Clap entity
impl From<ClapModel> for Clap {
    fn from(model: ClapModel) -> Self {
        Clap {
            user_id: Snowflake::new(model.user_id),
            article_id: Snowflake::new(model.article_id),
            count: model.count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
