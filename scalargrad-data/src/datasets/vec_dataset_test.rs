use super::*;

#[test]
fn test_vec_dataset_get_valid_index() {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.get(0), Ok(10));
    assert_eq!(dataset.get(2), Ok(30));
}

#[test]
fn test_vec_dataset_get_invalid_index() {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(
        dataset.get(3),
        Err(ScalarGradError::IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn test_vec_dataset_empty() {
    let dataset: VecDataset<i32> = VecDataset::new(Vec::new());
    assert!(dataset.is_empty());
    assert!(dataset.get(0).is_err());
}

#[test]
fn test_from_xy_pairs_rows_with_targets() {
    let dataset = VecDataset::from_xy(vec![vec![1.0, 2.0], vec![3.0, 4.0]], vec![-1.0, 1.0])
        .expect("matching lengths");
    assert_eq!(dataset.get(1), Ok((vec![3.0, 4.0], 1.0)));
}

#[test]
fn test_from_xy_length_mismatch() {
    assert_eq!(
        VecDataset::from_xy(vec![vec![1.0]], vec![]),
        Err(ScalarGradError::DatasetMismatch { inputs: 1, targets: 0 })
    );
}
