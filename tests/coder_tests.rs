mod common;

use rand::{rngs::StdRng, Rng, SeedableRng};
use rhuffman::{
    config::{Alphabet, SymbolFilter, UnknownSymbolPolicy},
    CoderConfig, CoderError, FrequencyTable, HuffmanCoder,
};
use rstest::rstest;

use crate::common::{decode, optimal_cost};

const PANGRAM: &str = "The quick brown fox jumps over the lazy dog";

fn random_text(seed: u64, len: usize, alphabet: &[char]) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            // Skewed pick so that frequencies differ a lot
            let index = rng.gen_range(0..alphabet.len());
            alphabet[rng.gen_range(0..=index)]
        })
        .collect()
}

#[rstest]
#[case("ab")]
#[case("aaabbc")]
#[case("abracadabra")]
#[case(PANGRAM)]
#[case("日本語のテキスト、日本語")]
fn codes_are_prefix_free(#[case] corpus: &str) {
    let coder = HuffmanCoder::new(corpus);
    assert!(coder.table().is_prefix_free());

    let entries = coder.dump_table();
    for a in &entries {
        for b in entries.iter().filter(|b| b.symbol != a.symbol) {
            assert!(!a.code.is_prefix_of(&b.code), "{:?} prefixes {:?}", a, b);
        }
    }
}

#[rstest]
#[case("aaabbc")]
#[case("abracadabra")]
#[case(PANGRAM)]
#[case("aaaaaaaaaaaaaaaabbbbbbbbccccddeffg")]
fn total_length_is_optimal(#[case] corpus: &str) {
    let coder = HuffmanCoder::new(corpus);
    let weights: Vec<usize> = coder.frequencies().iter().map(|(_, count)| count).collect();

    assert_eq!(coder.weighted_length(), optimal_cost(&weights));
    assert_eq!(
        coder.encode(corpus).unwrap().bit_length() as u128,
        coder.weighted_length()
    );
}

#[test]
fn random_corpora_are_optimal_and_decodable() {
    let alphabet: Vec<char> = ('a'..='z').chain('0'..='9').collect();
    for seed in 0..20 {
        let corpus = random_text(seed, 500, &alphabet);
        let coder = HuffmanCoder::new(&corpus);
        let weights: Vec<usize> = coder.frequencies().iter().map(|(_, c)| c).collect();

        assert_eq!(coder.weighted_length(), optimal_cost(&weights));

        let encoded = coder.encode(&corpus).unwrap();
        assert_eq!(decode(coder.tree(), &encoded.code), corpus);
    }
}

#[test]
fn construction_is_deterministic() {
    let first = HuffmanCoder::new(PANGRAM);
    for _ in 0..10 {
        let again = HuffmanCoder::new(PANGRAM);
        assert_eq!(again.dump_table(), first.dump_table());
    }

    // Same counts, different corpus order
    let shuffled: String = PANGRAM.chars().rev().collect();
    assert_eq!(HuffmanCoder::new(&shuffled).table(), first.table());
}

#[rstest]
#[case("aaabbc", "aaabbc")]
#[case("abracadabra", "cadabra")]
#[case(PANGRAM, "lazy fox")]
#[case("aaaa", "aaa")]
fn round_trip_through_tree(#[case] corpus: &str, #[case] word: &str) {
    let coder = HuffmanCoder::new(corpus);
    let encoded = coder.encode(word).unwrap();
    assert_eq!(decode(coder.tree(), &encoded.code), word);
}

#[test]
fn worked_example_bit_length() {
    let coder = HuffmanCoder::new("aaabbc");
    let encoded = coder.encode("aaabbc").unwrap();
    assert_eq!(encoded.bit_length(), 3 * 1 + 2 * 2 + 1 * 2);
    assert_eq!(encoded.code.to_bytes(), vec![0b0001_1111, 0b0000_0000]);
}

#[test]
fn empty_corpus_never_fails() {
    let config = CoderConfig {
        unknown_symbols: UnknownSymbolPolicy::Fail,
        ..Default::default()
    };
    let coder = HuffmanCoder::with_config("", config);
    assert_eq!(coder.diagnostics(), &[CoderError::EmptyCorpus]);

    let encoded = coder.encode("hello").unwrap();
    assert_eq!(encoded.bit_length(), 0);
}

#[test]
fn single_symbol_gets_non_empty_code() {
    let coder = HuffmanCoder::new("qqqqqq");
    let entries = coder.dump_table();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].code_length > 0);

    let encoded = coder.encode("qq").unwrap();
    assert_eq!(encoded.bit_length(), 2 * entries[0].code_length);
    assert_eq!(decode(coder.tree(), &encoded.code), "qq");
}

#[test]
fn unknown_symbol_policies() {
    let lenient = HuffmanCoder::new("aaabbc");
    let encoded = lenient.encode("abd").unwrap();
    assert_eq!(decode(lenient.tree(), &encoded.code), "ab");
    assert_eq!(
        encoded.skipped,
        vec![CoderError::UnknownSymbol {
            symbol: 'd',
            position: 2
        }]
    );

    let strict = HuffmanCoder::with_config(
        "aaabbc",
        CoderConfig {
            unknown_symbols: UnknownSymbolPolicy::Fail,
            ..Default::default()
        },
    );
    assert_eq!(
        strict.encode("abd"),
        Err(CoderError::UnknownSymbol {
            symbol: 'd',
            position: 2
        })
    );
}

#[test]
fn letters_only_coder_folds_case() {
    let config = CoderConfig {
        filter: SymbolFilter {
            alphabet: Alphabet::Letters,
            fold_case: true,
        },
        unknown_symbols: UnknownSymbolPolicy::Skip,
    };
    let coder = HuffmanCoder::with_config(PANGRAM, config);
    assert_eq!(coder.table().len(), 26);
    assert_eq!(coder.frequencies().get('t'), Some(2));

    let encoded = coder.encode("Lazy, DOG!").unwrap();
    assert!(encoded.skipped.is_empty());
    assert_eq!(decode(coder.tree(), &encoded.code), "lazydog");
}

#[test]
fn from_counts_matches_counted_corpus() {
    let counted = HuffmanCoder::new("aaabbc");
    let explicit = HuffmanCoder::from_frequencies(
        FrequencyTable::from_counts([('c', 1), ('a', 3), ('b', 2)]).unwrap(),
        CoderConfig::default(),
    );
    assert_eq!(counted.dump_table(), explicit.dump_table());
}

#[test]
fn oversized_counts_are_rejected_before_building() {
    assert_eq!(
        FrequencyTable::from_counts([('a', usize::MAX), ('b', 1)]),
        Err(CoderError::FrequencyOverflow('b'))
    );
}
