use proptest::prelude::*;
use proptest::test_runner::Config;
use quizbank_content::{Difficulty, Question};
use quizbank_query::{DifficultyFilter, Filter, PAGE_SIZE, TagFilter, filter, paginate};

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn question() -> impl Strategy<Value = Question> {
    (
        "[0-9]{1,6}",
        "[A-Za-z ]{0,24}",
        "[A-Za-z ]{0,48}",
        difficulty(),
        prop::collection::vec("[a-c]", 0..3),
    )
        .prop_map(|(id, q, a, difficulty, tags)| Question {
            id,
            q,
            a,
            difficulty,
            tags,
        })
}

fn criteria() -> impl Strategy<Value = Filter> {
    (
        "[A-Za-z]{0,3}",
        prop_oneof![
            Just(DifficultyFilter::All),
            difficulty().prop_map(DifficultyFilter::Only)
        ],
        prop_oneof![
            Just(TagFilter::All),
            "[a-d]".prop_map(TagFilter::Only)
        ],
    )
        .prop_map(|(query, difficulty, tag)| Filter {
            query,
            difficulty,
            tag,
        })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn filtering_is_idempotent(
        records in prop::collection::vec(question(), 0..40),
        f in criteria(),
    ) {
        let once: Vec<Question> = filter(&records, &f).into_iter().cloned().collect();
        let twice: Vec<Question> = filter(&once, &f).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filtering_preserves_order(
        records in prop::collection::vec(question(), 0..40),
        f in criteria(),
    ) {
        let kept = filter(&records, &f);
        let positions: Vec<usize> = kept
            .iter()
            .map(|k| records.iter().position(|r| std::ptr::eq(r, *k)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn pages_partition_the_input(
        items in prop::collection::vec(any::<u16>(), 0..350),
        page_size in 1usize..120,
    ) {
        let first = paginate(&items, 1, page_size);
        let mut joined = Vec::new();
        for n in 1..=first.total_pages {
            let page = paginate(&items, n, page_size);
            prop_assert!(page.items.len() <= page_size);
            joined.extend_from_slice(page.items);
        }
        prop_assert_eq!(joined, items.clone());
        prop_assert_eq!(first.show_controls(), items.len() > page_size);
    }

    #[test]
    fn any_page_number_lands_in_range(
        n in 0usize..500,
        page in 0usize..20,
    ) {
        let items: Vec<usize> = (0..n).collect();
        let p = paginate(&items, page, PAGE_SIZE);
        prop_assert!(p.number >= 1);
        prop_assert!(p.number <= p.total_pages.max(1));
    }
}

#[test]
fn exactly_one_hundred_is_a_single_page() {
    let items: Vec<usize> = (0..100).collect();
    let page = paginate(&items, 1, PAGE_SIZE);
    assert_eq!(page.total_pages, 1);
    assert!(!page.show_controls());
}

#[test]
fn tag_filter_uses_membership() {
    let q = Question {
        id: "1".into(),
        q: "q".into(),
        a: "a".into(),
        difficulty: Difficulty::Easy,
        tags: vec!["a".into(), "b".into()],
    };
    let records = vec![q];
    let tag = |t: &str| Filter {
        tag: TagFilter::Only(t.into()),
        ..Default::default()
    };
    assert_eq!(filter(&records, &tag("a")).len(), 1);
    assert!(filter(&records, &tag("c")).is_empty());
}

#[test]
fn query_is_case_insensitive_across_answer() {
    let records = vec![Question {
        id: "1".into(),
        q: "Explain".into(),
        a: "Recursion is a function calling itself".into(),
        difficulty: Difficulty::Medium,
        tags: Vec::new(),
    }];
    let f = Filter {
        query: "recursion".into(),
        ..Default::default()
    };
    assert_eq!(filter(&records, &f).len(), 1);
}
