#![no_main]

use landed_git::{DirectCommit, Entry, PullRequest};
use landed_github::{BatchQuery, GraphqlResponse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(response) = serde_json::from_slice::<GraphqlResponse>(data) else {
        return;
    };
    let mut entries: Vec<Entry> = vec![
        PullRequest::new("aaa1111", 1, "octo/a", vec![]).into(),
        DirectCommit::new("bbb2222", "Fix typo", vec![]).into(),
        PullRequest::new("ccc3333", 2, "octo/c", vec![]).into(),
    ];
    let Some(batch) = BatchQuery::build(&entries) else {
        return;
    };
    if let Ok(repository) = response.into_repository() {
        // Must never panic, whatever the server sends
        let _ = batch.reconcile(&mut entries, repository);
    }
});
