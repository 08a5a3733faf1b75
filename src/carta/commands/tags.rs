use super::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let tags = store.tags().into_iter().map(String::from).collect();
    Ok(CmdResult::default().with_tags(tags))
}
