use elovitz::Translator;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let words: Vec<String> = std::env::args().skip(1).collect();
    let translator = match Translator::english() {
        Ok(translator) => translator,
        Err(error) => {
            println!("Error: {}", error);
            std::process::exit(1);
        }
    };
    let phonemes = translator.translate_text(words.iter().map(String::as_str));
    println!("{}", phonemes.join(" "));
}
