use deptree_api::{Lemmatizer, PartOfSpeech};
use deptree_core::PipelineConfig;
use deptree_core::normalize::{NounDeriver, derive};

pub fn lemma(word: &str, pos: &str, config: &PipelineConfig) -> anyhow::Result<()> {
    let pos: PartOfSpeech = pos.parse()?;
    let lexicon = deptree_runtime::load_lexicon(config)?;
    println!("{}", lexicon.lemmatize(word, pos));
    Ok(())
}

pub fn nounify(verb: &str, config: &PipelineConfig) -> anyhow::Result<()> {
    let lexicon = deptree_runtime::load_lexicon(config)?;
    let deriver = NounDeriver::new(lexicon);

    println!("{}", deriver.nounify(verb));
    if let Some(noun) = derive::exception(verb) {
        println!("  (fixed mapping -> {})", noun);
        return Ok(());
    }
    for candidate in deriver.candidates(verb) {
        println!(
            "  {:<20} {:>3}  {:.3}",
            candidate.noun, candidate.count, candidate.weight
        );
    }
    Ok(())
}
