use lazyseq::{Mapper, Seq, Seq2, generate, hops, iter, iter_pairs, iter_slice, kv_hops};

#[test]
fn test_stages_between_hops() {
    let out = iter(1i32..=20)
        .mapping::<hops![u64, String]>()
        .filter(|n| n % 3 != 0)
        .map(|n| u64::from(n.unsigned_abs()) * 100)
        .skip_while(|n| *n < 500)
        .take(3)
        .map(|n| format!("{n:05}"))
        .collect_vec();
    assert_eq!(out, vec!["00500", "00700", "00800"]);
}

#[test]
fn test_expand_then_map() {
    let lengths = iter_slice(&["a b", "", "c d e"])
        .mapping::<hops![&str, usize]>()
        .expand(|line| iter(line.split_whitespace()))
        .map(str::len)
        .num()
        .sum();
    assert_eq!(lengths, 5);
}

#[test]
fn test_filter_map_at_each_hop() {
    let evens_as_words = generate(10, |i| i)
        .mapping::<hops![u32, &'static str]>()
        .filter_map(|i| u32::try_from(i).ok().filter(|n| n % 2 == 0))
        .filter_map(|n| match n {
            0 => Some("zero"),
            2 => Some("two"),
            4 => Some("four"),
            _ => None,
        })
        .collect_vec();
    assert_eq!(evens_as_words, vec!["zero", "two", "four"]);
}

#[test]
fn test_mapper_is_reusable() {
    let mapper: Mapper<_, hops![String]> = iter(0..5).mapping();
    assert_eq!(mapper.fold(0, |acc, n| acc + n), 10);
    let first = mapper.clone().map(|n| n.to_string()).first().unwrap();
    let last = mapper.map(|n| n.to_string()).last().unwrap();
    assert_eq!((first.as_str(), last.as_str()), ("0", "4"));
}

#[test]
fn test_kv_hops_chain() {
    let out = iter_pairs(vec![("a", 1), ("bb", 2), ("ccc", 3)])
        .mapping::<kv_hops![(usize, i32), (bool, String)]>()
        .map(|k, v| (k.len(), v * 10))
        .filter(|k, _| *k > 1)
        .map(|k, v| (k % 2 == 1, v.to_string()))
        .collect_pairs();
    assert_eq!(
        out,
        vec![(false, "20".to_string()), (true, "30".to_string())]
    );
}
