//! The fixture menu: a fixed, read-only catalog for the session.
//!
//! The catalog is an external data collaborator as far as the stores are
//! concerned; nothing here is ever mutated. Order matters — filtered views
//! preserve it.

use crate::catalog::{Category, Product};
use crate::ids::ProductId;
use crate::money::Money;
use std::sync::OnceLock;

static MENU: OnceLock<Vec<Product>> = OnceLock::new();

/// The full menu, in catalog order.
pub fn products() -> &'static [Product] {
    MENU.get_or_init(build_menu)
}

/// Look up a product by id.
pub fn find(id: ProductId) -> Option<&'static Product> {
    products().iter().find(|p| p.id == id)
}

fn build_menu() -> Vec<Product> {
    use Category::*;

    vec![
        // Шаурма
        Product::new(
            1,
            "Класична шаурма з куркою",
            Shawarma,
            Money::uah(15500),
            "/images/Класична шаурма з куркою-min.png",
            "Лаваш, куряче філе, свіжі овочі, часниковий соус, кетчуп, сир. \
             Обсмажується до золотистої скоринки.",
            4.8,
            &["Лаваш", "Куряче філе", "Капуста", "Помідори", "Огірки", "Часниковий соус"],
            450,
        ),
        Product::new(
            2,
            "Шаурма по-лівантськи",
            Shawarma,
            Money::uah(17500),
            "https://picsum.photos/seed/shawarma-lebanese/400/400",
            "Лаваш, маринована яловичина, маринована цибуля, соус тахіні, овочі гриль.",
            4.9,
            &["Лаваш", "Яловичина", "Маринована цибуля", "Соус тахіні", "Баклажан гриль", "Перець гриль"],
            520,
        ),
        Product::new(
            3,
            "Гостра шаурма “Техаська”",
            Shawarma,
            Money::uah(16500),
            "https://picsum.photos/seed/shawarma-texas/400/400",
            "Лаваш, свинина BBQ, соус чилі, сир чеддер, карамелізована цибуля.",
            4.7,
            &["Лаваш", "Свинина BBQ", "Соус чилі", "Сир чеддер", "Карамелізована цибуля", "Халапеньйо"],
            550,
        ),
        Product::new(
            4,
            "Веганська шаурма",
            Shawarma,
            Money::uah(15000),
            "https://picsum.photos/seed/shawarma-vegan/400/400",
            "Лаваш, фалафель, хумус, овочі, йогуртово-лимонний соус.",
            4.6,
            &["Лаваш", "Фалафель", "Хумус", "Табуле", "Свіжі овочі", "Лимонний соус"],
            380,
        ),
        Product::new(
            5,
            "Шаурма “Мікс”",
            Shawarma,
            Money::uah(18500),
            "https://picsum.photos/seed/shawarma-mix/400/400",
            "Подвійний лаваш, курятина та яловичина, сир моцарела, фірмовий соус. \
             Запікається на грилі.",
            5.0,
            &["Подвійний лаваш", "Курятина", "Яловичина", "Сир моцарела", "Фірмовий соус", "Картопля фрі"],
            620,
        ),
        // Бургери
        Product::new(
            6,
            "Чізбургер Класичний",
            Burgers,
            Money::uah(16000),
            "https://picsum.photos/seed/burger-classic/400/400",
            "Булка бриош, біфштекс, 2 слайси сиру чеддер, бургерний соус, овочі.",
            4.7,
            &["Булка бриош", "Яловича котлета", "Сир чеддер", "Солоний огірок", "Цибуля", "Кетчуп", "Гірчиця"],
            580,
        ),
        Product::new(
            7,
            "Бургер “Техас BBQ”",
            Burgers,
            Money::uah(18000),
            "https://picsum.photos/seed/burger-texas-bbq/400/400",
            "Чорна булка, свинячий біфштекс, соус BBQ, карамелізована цибуля.",
            4.8,
            &["Чорна булка", "Свиняча котлета", "Соус BBQ", "Карамелізована цибуля", "Бекон", "Сир чеддер"],
            680,
        ),
        Product::new(
            8,
            "Бургер “Дабл Чіз”",
            Burgers,
            Money::uah(19500),
            "https://picsum.photos/seed/burger-double-cheese/400/400",
            "Булка бриош, 2 котлети, сир чеддер, соус. Гаряча подача.",
            4.9,
            &["Булка бриош", "Дві яловичі котлети", "Подвійний сир чеддер", "Соус", "Цибуля", "Огірок"],
            750,
        ),
        Product::new(
            9,
            "Курячий бургер",
            Burgers,
            Money::uah(15500),
            "https://picsum.photos/seed/burger-chicken/400/400",
            "Панірована куряча котлета, кунжутна булка, сир, часниковий майонез.",
            4.6,
            &["Кунжутна булка", "Куряча котлета в паніровці", "Сир", "Салат Айсберг", "Часниковий майонез"],
            530,
        ),
        Product::new(
            10,
            "Веггі бургер",
            Burgers,
            Money::uah(15000),
            "https://picsum.photos/seed/burger-veggie/400/400",
            "Котлета з нуту, цільнозернова булка, соус авокадо, овочі гриль.",
            4.5,
            &["Цільнозернова булка", "Котлета з нуту", "Соус авокадо", "Овочі гриль", "Рукола"],
            420,
        ),
        // Напої
        Product::new(
            11,
            "Лимонад домашній",
            Drinks,
            Money::uah(6500),
            "https://picsum.photos/seed/drink-lemonade/400/400",
            "Освіжаючий домашній лимонад. Об'єм: 0.5 л.",
            4.9,
            &["Вода", "Свіжий лимонний сік", "Цукор", "М'ята"],
            150,
        ),
        Product::new(
            12,
            "Молочний коктейль ванільний",
            Drinks,
            Money::uah(8000),
            "https://picsum.photos/seed/drink-milkshake/400/400",
            "Класичний ванільний молочний коктейль. Об'єм: 0.4 л.",
            4.8,
            &["Молоко", "Ванільне морозиво", "Збиті вершки"],
            350,
        ),
        Product::new(
            13,
            "Холодна кава",
            Drinks,
            Money::uah(7500),
            "https://picsum.photos/seed/drink-iced-coffee/400/400",
            "Прохолодна та бадьора кава. Об'єм: 0.4 л.",
            4.7,
            &["Еспресо", "Молоко", "Лід", "Сироп (за бажанням)"],
            120,
        ),
        Product::new(
            14,
            "Coca-Cola / Fanta / Sprite",
            Drinks,
            Money::uah(5500),
            "https://picsum.photos/seed/drink-soda/400/400",
            "Ваш улюблений газований напій. Об'єм: 0.33 л.",
            4.5,
            &["Газована вода", "Цукор", "Ароматизатори"],
            140,
        ),
        Product::new(
            15,
            "Смузі ягідний",
            Drinks,
            Money::uah(8500),
            "https://picsum.photos/seed/drink-smoothie/400/400",
            "Вітамінний смузі зі свіжих ягід. Об'єм: 0.4 л.",
            4.9,
            &["Полуниця", "Малина", "Чорниця", "Банан", "Йогурт"],
            250,
        ),
        // Десерти
        Product::new(
            16,
            "Чізкейк Нью-Йорк",
            Desserts,
            Money::uah(9000),
            "https://picsum.photos/seed/dessert-cheesecake/400/400",
            "Ніжний та класичний сирний десерт.",
            4.9,
            &["Вершковий сир", "Пісочне тісто", "Яйця", "Цукор", "Ваніль"],
            400,
        ),
        Product::new(
            17,
            "Брауні з горіхами",
            Desserts,
            Money::uah(8500),
            "https://picsum.photos/seed/dessert-brownie/400/400",
            "Насичений шоколадний десерт з хрумкими горіхами.",
            4.8,
            &["Чорний шоколад", "Вершкове масло", "Яйця", "Цукор", "Волоські горіхи"],
            480,
        ),
        Product::new(
            18,
            "Маффін ванільний",
            Desserts,
            Money::uah(7500),
            "https://picsum.photos/seed/dessert-muffin/400/400",
            "Пухкий ванільний маффін із шматочками білого шоколаду.",
            4.6,
            &["Борошно", "Цукор", "Молоко", "Яйця", "Білий шоколад"],
            350,
        ),
        Product::new(
            19,
            "Донат глазурований",
            Desserts,
            Money::uah(7000),
            "https://picsum.photos/seed/dessert-donut/400/400",
            "Класичний пончик, вкритий солодкою глазур'ю.",
            4.5,
            &["Тісто для донатів", "Цукрова глазур", "Кондитерська посипка"],
            320,
        ),
        Product::new(
            20,
            "Мус шоколадний",
            Desserts,
            Money::uah(8000),
            "https://picsum.photos/seed/dessert-mousse/400/400",
            "Легкий та повітряний кремовий десерт з насиченим смаком шоколаду.",
            4.7,
            &["Чорний шоколад", "Вершки", "Яйця", "Цукор"],
            380,
        ),
        // Соуси
        Product::new(
            21,
            "Часниковий соус",
            Sauces,
            Money::uah(2000),
            "https://picsum.photos/seed/sauce-garlic/400/400",
            "На основі майонезу, свіжого часнику та зелені.",
            4.9,
            &["Майонез", "Часник", "Кріп", "Спеції"],
            150,
        ),
        Product::new(
            22,
            "Фірмовий бургерний соус",
            Sauces,
            Money::uah(2500),
            "https://picsum.photos/seed/sauce-burger/400/400",
            "Класичне поєднання майонезу, кетчупу та секретних спецій.",
            4.8,
            &["Майонез", "Кетчуп", "Гірчиця", "Спеції"],
            180,
        ),
        Product::new(
            23,
            "Соус BBQ",
            Sauces,
            Money::uah(2500),
            "https://picsum.photos/seed/sauce-bbq/400/400",
            "Насичений димний, солодко-гострий соус.",
            4.7,
            &["Томатна паста", "Оцет", "Коричневий цукор", "Димний ароматизатор"],
            120,
        ),
        Product::new(
            24,
            "Сирний соус",
            Sauces,
            Money::uah(3000),
            "https://picsum.photos/seed/sauce-cheese/400/400",
            "Густий соус з сиру, вершків та спецій.",
            4.9,
            &["Сир чеддер", "Вершки", "Молоко", "Спеції"],
            220,
        ),
        Product::new(
            25,
            "Гострий соус чилі",
            Sauces,
            Money::uah(2500),
            "https://picsum.photos/seed/sauce-chili/400/400",
            "Пікантний соус на основі томатів, перцю чилі та часнику.",
            4.6,
            &["Перець чилі", "Томати", "Часник", "Оцет"],
            80,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_size_and_order() {
        let menu = products();
        assert_eq!(menu.len(), 25);
        // Ids are assigned in catalog order.
        for (i, product) in menu.iter().enumerate() {
            assert_eq!(product.id.get() as usize, i + 1);
        }
    }

    #[test]
    fn test_menu_ids_unique() {
        let menu = products();
        let mut ids: Vec<_> = menu.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), menu.len());
    }

    #[test]
    fn test_menu_five_per_category() {
        for category in Category::ALL {
            let count = products().iter().filter(|p| p.category == category).count();
            assert_eq!(count, 5, "category {:?}", category);
        }
    }

    #[test]
    fn test_menu_ratings_in_range() {
        for product in products() {
            assert!((0.0..=5.0).contains(&product.rating), "{}", product.name);
            assert!(product.price.is_positive(), "{}", product.name);
        }
    }

    #[test]
    fn test_find() {
        let product = find(ProductId::new(11)).unwrap();
        assert_eq!(product.name, "Лимонад домашній");
        assert!(find(ProductId::new(99)).is_none());
    }
}
