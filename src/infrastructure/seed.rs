//! Fixed seed catalog, written to the store on first run

use crate::models::Book;

/// Genres offered for preference selection at signup
pub const GENRES: [&str; 6] = [
    "Classic Literature",
    "Science Fiction",
    "Fantasy",
    "Romance",
    "Mystery",
    "Biography",
];

fn book(
    id: &str,
    title: &str,
    author: &str,
    isbn: &str,
    genre: &str,
    description: &str,
    cover_url: &str,
    publish_year: i32,
    total_copies: u32,
    available_copies: u32,
    rating: f64,
) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        isbn: isbn.to_string(),
        genre: genre.to_string(),
        description: description.to_string(),
        cover_url: cover_url.to_string(),
        publish_year,
        total_copies,
        available_copies,
        rating,
    }
}

/// The eight-book demo catalog
pub fn seed_books() -> Vec<Book> {
    vec![
        book(
            "1",
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "9780743273565",
            "Classic Literature",
            "A classic American novel set in the Jazz Age, exploring themes of wealth, love, and the American Dream.",
            "https://images.pexels.com/photos/1370295/pexels-photo-1370295.jpeg?auto=compress&cs=tinysrgb&w=300",
            1925,
            5,
            3,
            4.2,
        ),
        book(
            "2",
            "To Kill a Mockingbird",
            "Harper Lee",
            "9780446310789",
            "Classic Literature",
            "A gripping tale of racial injustice and childhood innocence in the American South.",
            "https://images.pexels.com/photos/159711/books-bookstore-book-reading-159711.jpeg?auto=compress&cs=tinysrgb&w=300",
            1960,
            4,
            2,
            4.8,
        ),
        book(
            "3",
            "Dune",
            "Frank Herbert",
            "9780441172719",
            "Science Fiction",
            "Epic space opera set on the desert planet Arrakis, featuring political intrigue and mystical powers.",
            "https://images.pexels.com/photos/2908984/pexels-photo-2908984.jpeg?auto=compress&cs=tinysrgb&w=300",
            1965,
            6,
            4,
            4.6,
        ),
        book(
            "4",
            "The Hobbit",
            "J.R.R. Tolkien",
            "9780547928227",
            "Fantasy",
            "The enchanting prelude to The Lord of the Rings, following Bilbo Baggins on his unexpected journey.",
            "https://images.pexels.com/photos/1666021/pexels-photo-1666021.jpeg?auto=compress&cs=tinysrgb&w=300",
            1937,
            8,
            5,
            4.7,
        ),
        book(
            "5",
            "Pride and Prejudice",
            "Jane Austen",
            "9780141439518",
            "Romance",
            "A witty commentary on 19th-century British society and the complex relationship between Elizabeth and Darcy.",
            "https://images.pexels.com/photos/1029141/pexels-photo-1029141.jpeg?auto=compress&cs=tinysrgb&w=300",
            1813,
            3,
            1,
            4.5,
        ),
        book(
            "6",
            "1984",
            "George Orwell",
            "9780451524935",
            "Dystopian Fiction",
            "A chilling dystopian masterpiece about totalitarian control and the power of independent thought.",
            "https://images.pexels.com/photos/2982449/pexels-photo-2982449.jpeg?auto=compress&cs=tinysrgb&w=300",
            1949,
            7,
            6,
            4.4,
        ),
        book(
            "7",
            "The Catcher in the Rye",
            "J.D. Salinger",
            "9780316769174",
            "Coming of Age",
            "A controversial and influential novel about teenage rebellion and alienation in post-war America.",
            "https://images.pexels.com/photos/1319854/pexels-photo-1319854.jpeg?auto=compress&cs=tinysrgb&w=300",
            1951,
            4,
            3,
            3.8,
        ),
        book(
            "8",
            "Harry Potter and the Sorcerer's Stone",
            "J.K. Rowling",
            "9780439708180",
            "Fantasy",
            "The magical beginning of Harry Potter's journey at Hogwarts School of Witchcraft and Wizardry.",
            "https://images.pexels.com/photos/1029141/pexels-photo-1029141.jpeg?auto=compress&cs=tinysrgb&w=300",
            1997,
            10,
            7,
            4.9,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_has_eight_books_with_unique_ids() {
        let books = seed_books();
        assert_eq!(books.len(), 8);
        let ids: HashSet<&str> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn seed_respects_the_availability_invariant() {
        for b in seed_books() {
            assert!(b.available_copies <= b.total_copies, "{}", b.title);
        }
    }

    #[test]
    fn dune_is_book_three_with_four_of_six_copies() {
        let books = seed_books();
        let dune = books.iter().find(|b| b.id == "3").unwrap();
        assert_eq!(dune.title, "Dune");
        assert_eq!(dune.total_copies, 6);
        assert_eq!(dune.available_copies, 4);
    }
}
