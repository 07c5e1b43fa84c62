use std::collections::HashSet;

use super::*;

fn batch(urls: &[&str]) -> Vec<StagedImage> {
    urls.iter().map(|url| StagedImage::new((*url).to_owned())).collect()
}

fn first_id(staging: &ImageStaging) -> String {
    staging.images()[0].id.clone()
}

// =============================================================
// Adding
// =============================================================

#[test]
fn append_grows_by_batch_size_with_unique_ids() {
    let mut staging = ImageStaging::default();
    staging.append_batch(batch(&["data:a"]));
    let payloads = staging.append_batch(batch(&["data:b", "data:c", "data:d"]));

    assert_eq!(staging.len(), 4);
    assert_eq!(payloads, vec!["data:a", "data:b", "data:c", "data:d"]);
    let ids = staging.images().iter().map(|img| img.id.clone()).collect::<HashSet<_>>();
    assert_eq!(ids.len(), 4);
}

#[test]
fn payloads_preserve_selection_order_and_strip_ids() {
    let mut staging = ImageStaging::default();
    let payloads = staging.append_batch(batch(&["data:1", "data:2"]));
    assert_eq!(payloads, staging.payloads());
    for (payload, image) in payloads.iter().zip(staging.images()) {
        assert!(!payload.contains(&image.id));
    }
}

#[test]
fn new_images_start_present() {
    let image = StagedImage::new("data:x".to_owned());
    assert_eq!(image.phase, StagedPhase::Present);
    assert!(!image.id.is_empty());
}

// =============================================================
// Two-phase removal
// =============================================================

#[test]
fn removing_image_stays_listed_until_acknowledged() {
    let mut staging = ImageStaging::default();
    staging.append_batch(batch(&["data:a", "data:b"]));
    let id = first_id(&staging);

    assert!(staging.mark_removing(&id));
    assert_eq!(staging.len(), 2);
    assert!(staging.is_removing(&id));
    assert_eq!(staging.payloads(), vec!["data:a", "data:b"]);

    let payloads = staging.confirm_removed(&id).expect("removal confirmed");
    assert_eq!(payloads, vec!["data:b"]);
    assert!(staging.images().iter().all(|img| img.id != id));
}

#[test]
fn acknowledgement_without_mark_is_ignored() {
    let mut staging = ImageStaging::default();
    staging.append_batch(batch(&["data:a"]));
    let id = first_id(&staging);
    assert_eq!(staging.confirm_removed(&id), None);
    assert_eq!(staging.len(), 1);
}

#[test]
fn removed_image_cannot_be_resurrected() {
    let mut staging = ImageStaging::default();
    staging.append_batch(batch(&["data:a"]));
    let id = first_id(&staging);
    staging.mark_removing(&id);
    staging.confirm_removed(&id);

    assert!(!staging.mark_removing(&id));
    assert_eq!(staging.confirm_removed(&id), None);
    assert!(staging.is_empty());
}

#[test]
fn marking_twice_is_rejected() {
    let mut staging = ImageStaging::default();
    staging.append_batch(batch(&["data:a"]));
    let id = first_id(&staging);
    assert!(staging.mark_removing(&id));
    assert!(!staging.mark_removing(&id));
    assert!(staging.is_removing(&id));
}

#[test]
fn unknown_id_is_a_no_op() {
    let mut staging = ImageStaging::default();
    staging.append_batch(batch(&["data:a"]));
    assert!(!staging.mark_removing("missing"));
    assert_eq!(staging.confirm_removed("missing"), None);
    assert_eq!(staging.len(), 1);
}

// =============================================================
// Decode results
// =============================================================

#[test]
fn stage_decoded_skips_failures_and_keeps_order() {
    let results: Vec<Result<String, String>> = vec![
        Ok("data:1".to_owned()),
        Err("unreadable".to_owned()),
        Ok("data:3".to_owned()),
    ];
    let (staged, failed) = stage_decoded(results);
    assert_eq!(failed, 1);
    assert_eq!(staged.iter().map(|img| img.data_url.as_str()).collect::<Vec<_>>(), vec!["data:1", "data:3"]);
}

#[test]
fn stage_decoded_all_failed_yields_empty_batch() {
    let results: Vec<Result<String, ()>> = vec![Err(()), Err(())];
    let (staged, failed) = stage_decoded(results);
    assert!(staged.is_empty());
    assert_eq!(failed, 2);
}

#[test]
fn summary_counts_staged_images() {
    let mut staging = ImageStaging::default();
    assert_eq!(staging.summary(), "No images selected");
    staging.append_batch(batch(&["data:a"]));
    assert_eq!(staging.summary(), "1 image selected");
    staging.append_batch(batch(&["data:b", "data:c"]));
    assert_eq!(staging.summary(), "3 images selected");
    let id = first_id(&staging);
    assert!(staging.mark_removing(&id));
    assert_eq!(staging.summary(), "3 images selected");
}
