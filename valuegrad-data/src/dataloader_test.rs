use super::*;
use crate::datasets::VecDataset;
use crate::samplers::{RandomSampler, SequentialSampler};
use std::collections::HashSet;

#[derive(Debug)]
struct FailingDataset;

impl Dataset for FailingDataset {
    type Item = u8;

    fn get(&self, index: usize) -> Result<u8, ValueGradError> {
        if index == 2 {
            Err(ValueGradError::IndexOutOfBounds { index, len: 0 })
        } else {
            Ok(index as u8)
        }
    }

    fn len(&self) -> usize {
        6
    }
}

#[test]
fn test_dataloader_sequential() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
    let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
    let batches: Vec<Vec<i32>> = loader.iter().map(|b| b.unwrap()).collect();
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    assert_eq!(loader.num_batches(), 3);
}

#[test]
fn test_dataloader_keeps_last_partial_batch() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
    let batches: Vec<Vec<i32>> = loader.iter().map(|b| b.unwrap()).collect();
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
    assert_eq!(loader.num_batches(), 3);
}

#[test]
fn test_dataloader_drop_last() {
    let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
    let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), true).unwrap();
    let batches: Vec<Vec<i32>> = loader.iter().map(|b| b.unwrap()).collect();
    // The trailing batch of size 1 is skipped.
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4]]);
    assert_eq!(loader.num_batches(), 2);
}

#[test]
fn test_each_iter_is_a_new_epoch() {
    let dataset = VecDataset::new(vec![7, 8, 9]);
    let loader = DataLoader::new(dataset, 3, SequentialSampler::new(), false).unwrap();
    for _ in 0..2 {
        let mut count = 0;
        for batch in &loader {
            assert_eq!(batch.unwrap(), vec![7, 8, 9]);
            count += 1;
        }
        assert_eq!(count, 1);
    }
}

#[test]
fn test_random_sampler_covers_dataset() {
    let dataset = VecDataset::new((0..10).collect::<Vec<usize>>());
    let loader = DataLoader::new(dataset, 4, RandomSampler::new(false, None).with_seed(3), false).unwrap();
    let seen: Vec<usize> = loader.iter().flat_map(|b| b.unwrap()).collect();
    assert_eq!(seen.len(), 10);
    assert_eq!(seen.into_iter().collect::<HashSet<_>>(), (0..10).collect());
}

#[test]
fn test_zero_batch_size_rejected() {
    let dataset = VecDataset::new(vec![1]);
    let result = DataLoader::new(dataset, 0, SequentialSampler::new(), false);
    assert!(matches!(
        result,
        Err(ValueGradError::InvalidHyperparameter { ref name, .. }) if name == "batch_size"
    ));
}

#[test]
fn test_empty_dataset_yields_nothing() {
    let dataset: VecDataset<i32> = VecDataset::new(Vec::new());
    let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
    assert_eq!(loader.iter().count(), 0);
    assert_eq!(loader.num_batches(), 0);
}

#[test]
fn test_dataset_error_is_forwarded() {
    let loader = DataLoader::new(FailingDataset, 2, SequentialSampler::new(), false).unwrap();
    let mut batches = loader.iter();
    assert_eq!(batches.next().unwrap().unwrap(), vec![0, 1]);
    assert!(batches.next().unwrap().is_err());
}

#[test]
fn test_failed_batch_does_not_shift_later_batches() {
    let loader = DataLoader::new(FailingDataset, 2, SequentialSampler::new(), false).unwrap();
    let batches: Vec<_> = loader.iter().collect();
    assert_eq!(batches.len(), loader.num_batches());
    assert_eq!(batches[0], Ok(vec![0, 1]));
    assert_eq!(
        batches[1],
        Err(ValueGradError::IndexOutOfBounds { index: 2, len: 0 })
    );
    assert_eq!(batches[2], Ok(vec![4, 5]));
}
