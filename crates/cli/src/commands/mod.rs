pub(crate) mod bookmarks;
pub(crate) mod browse;
pub(crate) mod serve;
