use binary_tree::BinaryTree;
use proconio::input;

#[derive(Debug)]
struct Person {
    age: u32,
    name: String,
}

// Input: n, then n lines of `age name`.
// Prints the tree shape, then every person with the L/R path leading to it.
fn main() {
    input! {
        n: usize,
        people: [(u32, String); n],
    }

    let mut tree = BinaryTree::new();
    for (age, name) in people {
        tree.insert(age, Person { age, name });
    }
    println!("{tree}");

    let mut stack: Vec<_> = tree
        .root()
        .map(|root| (root, String::new()))
        .into_iter()
        .collect();
    while let Some((node, path)) = stack.pop() {
        let person = node.value();
        let label = if path.is_empty() { "root" } else { path.as_str() };
        println!("{} {} {}", label, person.name, person.age);
        if let Some(right) = node.right() {
            stack.push((right, format!("{path}R")));
        }
        if let Some(left) = node.left() {
            stack.push((left, format!("{path}L")));
        }
    }
}
