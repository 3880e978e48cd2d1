mod repositories;

pub use repositories::{
    ArticleRepository, ClapTotals, EngagementRepository, FollowRepository, RepoResult,
    UserRepository,
};
