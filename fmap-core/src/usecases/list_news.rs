use super::prelude::*;

pub fn list_news<R: NewsRepo>(repo: &R, page_token: Option<&str>) -> Result<Page<NewsArticle>> {
    let articles = repo.all_news_articles()?;
    Ok(paginate(articles, LISTING_PAGE_SIZE, page_token))
}
