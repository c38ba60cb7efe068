use super::*;

impl<'a> MenuRepo for DbReadOnly<'a> {
    fn add_menu_image(&self, _image: &MenuImage) -> Result<()> {
        unreachable!();
    }
    fn menu_images_of_place(&self, place_id: &str) -> Result<Vec<MenuImage>> {
        menu_images_of_place(&mut self.conn.borrow_mut(), place_id)
    }
}

impl<'a> MenuRepo for DbReadWrite<'a> {
    fn add_menu_image(&self, image: &MenuImage) -> Result<()> {
        add_menu_image(&mut self.conn.borrow_mut(), image)
    }
    fn menu_images_of_place(&self, place_id: &str) -> Result<Vec<MenuImage>> {
        menu_images_of_place(&mut self.conn.borrow_mut(), place_id)
    }
}

impl<'a> MenuRepo for DbConnection<'a> {
    fn add_menu_image(&self, image: &MenuImage) -> Result<()> {
        add_menu_image(&mut self.conn.borrow_mut(), image)
    }
    fn menu_images_of_place(&self, place_id: &str) -> Result<Vec<MenuImage>> {
        menu_images_of_place(&mut self.conn.borrow_mut(), place_id)
    }
}

fn add_menu_image(conn: &mut SqliteConnection, image: &MenuImage) -> Result<()> {
    let place_rowid = resolve_place_rowid(conn, image.place_id.as_str())?;
    let new_image = models::NewMenuImage {
        id: image.id.as_str(),
        place_rowid,
        image_url: image.image_url.as_deref(),
    };
    diesel::insert_into(schema::menu_images::table)
        .values(&new_image)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn menu_images_of_place(conn: &mut SqliteConnection, place_id: &str) -> Result<Vec<MenuImage>> {
    use schema::{menu_images, places};
    Ok(menu_images::table
        .inner_join(places::table)
        .filter(places::dsl::id.eq(place_id))
        .order_by(menu_images::dsl::rowid)
        .select((
            menu_images::dsl::rowid,
            menu_images::dsl::id,
            menu_images::dsl::image_url,
            places::dsl::id,
        ))
        .load::<models::JoinedMenuImage>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
