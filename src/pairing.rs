//! Pairing of annotation edge maps with the subject's original image.
//!
//! File names follow the `<subject>_...` convention where annotation files
//! additionally contain the marker `"Annotation"`. Each annotation is paired
//! with the first file sharing its subject prefix that is not itself an
//! annotation; annotations without a counterpart are skipped.

/// One matched annotation/original file name pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePair {
    pub annotation: String,
    pub original: String,
}

const ANNOTATION_MARKER: &str = "Annotation";

/// Pair annotation files with originals by subject prefix.
pub fn pair_annotation_files(names: &[String]) -> Vec<FilePair> {
    let mut pairs = Vec::new();
    for name in names {
        if !name.contains(ANNOTATION_MARKER) {
            continue;
        }
        let Some(subject) = name.split('_').next() else {
            continue;
        };
        let original = names
            .iter()
            .find(|other| other.contains(subject) && !other.contains(ANNOTATION_MARKER));
        if let Some(original) = original {
            pairs.push(FilePair {
                annotation: name.clone(),
                original: original.clone(),
            });
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::{pair_annotation_files, FilePair};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pairs_by_subject_prefix() {
        let files = names(&[
            "s01_Annotation.png",
            "s01_tissue.png",
            "s02_tissue.png",
            "s02_Annotation.png",
        ]);
        let pairs = pair_annotation_files(&files);
        assert_eq!(
            pairs,
            vec![
                FilePair {
                    annotation: "s01_Annotation.png".into(),
                    original: "s01_tissue.png".into(),
                },
                FilePair {
                    annotation: "s02_Annotation.png".into(),
                    original: "s02_tissue.png".into(),
                },
            ]
        );
    }

    #[test]
    fn unmatched_annotations_are_skipped() {
        let files = names(&["s03_Annotation.png", "s04_tissue.png"]);
        assert!(pair_annotation_files(&files).is_empty());
    }

    #[test]
    fn originals_alone_produce_nothing() {
        let files = names(&["s05_tissue.png", "s06_tissue.png"]);
        assert!(pair_annotation_files(&files).is_empty());
    }
}
