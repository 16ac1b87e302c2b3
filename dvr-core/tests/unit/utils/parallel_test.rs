use super::*;

#[test]
fn can_map_collection_in_parallel() {
    let source: Vec<i32> = (0..100).collect();

    let result = parallel_into_collect(source, |value| value * 2);

    assert_eq!(result, (0..100).map(|value| value * 2).collect::<Vec<_>>());
}
