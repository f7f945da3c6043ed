use std::env;

use berttok::{BertConfig, BertTokenizer, Tokenizer, Vocabulary};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Usage: encode_batch [vocab.txt] [text...]
    let mut args = env::args().skip(1);

    let config = BertConfig::default().with_lower_case(true);
    let tokenizer = match args.next() {
        Some(path) => BertTokenizer::from_file_with_config(path, config)?,
        None => {
            let vocab = Vocabulary::from_lines([
                "[PAD]", "[UNK]", "[CLS]", "[SEP]", "[MASK]", "hello", "world", "token", "##izer",
                ",", "!", "中", "文",
            ]);
            BertTokenizer::new(vocab, config)
        }
    };

    let mut texts: Vec<String> = args.collect();
    if texts.is_empty() {
        texts = vec![
            "Hello, world!".to_string(),
            "Tokenizer 中文".to_string(),
            "héllo".to_string(),
        ];
    }

    for text in &texts {
        let tokens = tokenizer.tokenize(text);
        println!("{text:?}");
        println!("  tokens: {tokens:?}");
        println!("  ids:    {:?}", tokenizer.encode(text)?);
        println!("  decode: {:?}", tokenizer.decode(&tokens));
    }

    let batch = tokenizer.encode_batch(&texts)?;
    println!("\nbatch shape: {:?}", batch.shape());
    for (name, array) in batch.named() {
        println!("{name}:\n{array}");
    }

    Ok(())
}
