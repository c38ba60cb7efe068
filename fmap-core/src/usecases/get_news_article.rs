use super::prelude::*;

pub fn get_news_article<R: NewsRepo>(repo: &R, id: &str) -> Result<NewsArticle> {
    Ok(repo.get_news_article(id)?)
}
