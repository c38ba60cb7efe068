use super::*;

impl<'a> NewsRepo for DbReadOnly<'a> {
    fn create_news_article(&self, _article: &NewsArticle) -> Result<()> {
        unreachable!();
    }
    fn update_news_article(&self, _article: &NewsArticle) -> Result<()> {
        unreachable!();
    }

    fn get_news_article(&self, id: &str) -> Result<NewsArticle> {
        get_news_article(&mut self.conn.borrow_mut(), id)
    }
    fn all_news_articles(&self) -> Result<Vec<NewsArticle>> {
        all_news_articles(&mut self.conn.borrow_mut())
    }
    fn count_news_articles(&self) -> Result<usize> {
        count_news_articles(&mut self.conn.borrow_mut())
    }
}

impl<'a> NewsRepo for DbReadWrite<'a> {
    fn create_news_article(&self, article: &NewsArticle) -> Result<()> {
        create_news_article(&mut self.conn.borrow_mut(), article)
    }
    fn update_news_article(&self, article: &NewsArticle) -> Result<()> {
        update_news_article(&mut self.conn.borrow_mut(), article)
    }

    fn get_news_article(&self, id: &str) -> Result<NewsArticle> {
        get_news_article(&mut self.conn.borrow_mut(), id)
    }
    fn all_news_articles(&self) -> Result<Vec<NewsArticle>> {
        all_news_articles(&mut self.conn.borrow_mut())
    }
    fn count_news_articles(&self) -> Result<usize> {
        count_news_articles(&mut self.conn.borrow_mut())
    }
}

impl<'a> NewsRepo for DbConnection<'a> {
    fn create_news_article(&self, article: &NewsArticle) -> Result<()> {
        create_news_article(&mut self.conn.borrow_mut(), article)
    }
    fn update_news_article(&self, article: &NewsArticle) -> Result<()> {
        update_news_article(&mut self.conn.borrow_mut(), article)
    }

    fn get_news_article(&self, id: &str) -> Result<NewsArticle> {
        get_news_article(&mut self.conn.borrow_mut(), id)
    }
    fn all_news_articles(&self) -> Result<Vec<NewsArticle>> {
        all_news_articles(&mut self.conn.borrow_mut())
    }
    fn count_news_articles(&self) -> Result<usize> {
        count_news_articles(&mut self.conn.borrow_mut())
    }
}

fn create_news_article(conn: &mut SqliteConnection, article: &NewsArticle) -> Result<()> {
    let new_article = models::NewNewsArticle {
        id: article.id.as_str(),
        title: &article.title,
        body: &article.body,
        published_at: article.published_at.into_secs(),
        image_url: article.image_url.as_deref(),
    };
    diesel::insert_into(schema::news_articles::table)
        .values(&new_article)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_news_article(conn: &mut SqliteConnection, article: &NewsArticle) -> Result<()> {
    use schema::news_articles::dsl;
    // The publication date is immutable and absent from the changeset.
    let changeset = models::NewsArticleChangeset {
        title: &article.title,
        body: &article.body,
        image_url: article.image_url.as_deref(),
    };
    let count = diesel::update(dsl::news_articles.filter(dsl::id.eq(article.id.as_str())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_news_article(conn: &mut SqliteConnection, id: &str) -> Result<NewsArticle> {
    use schema::news_articles::dsl;
    Ok(dsl::news_articles
        .filter(dsl::id.eq(id))
        .first::<models::NewsArticleEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_news_articles(conn: &mut SqliteConnection) -> Result<Vec<NewsArticle>> {
    use schema::news_articles::dsl;
    Ok(dsl::news_articles
        .order_by(dsl::rowid)
        .load::<models::NewsArticleEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_news_articles(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::news_articles::dsl;
    Ok(dsl::news_articles
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
